// src/catalog/requirements.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    Unset,
    Yes,
    No,
}

impl Choice {
    /// Selector text. Unset reads as "N" since it constrains nothing.
    pub fn label(self) -> &'static str {
        match self {
            Choice::Yes => "Y",
            Choice::No | Choice::Unset => "N",
        }
    }

    pub fn is_required(self) -> bool {
        self == Choice::Yes
    }
}

/// The user's feature choices, kept in catalog column order so the form can
/// render them as listed in the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirements {
    choices: Vec<(String, Choice)>,
}

impl Requirements {
    pub fn for_features<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: features
                .into_iter()
                .map(|feature| (feature.into(), Choice::Unset))
                .collect(),
        }
    }

    pub fn reset(&mut self) {
        for (_, choice) in &mut self.choices {
            *choice = Choice::Unset;
        }
    }

    pub fn required_features(&self) -> impl Iterator<Item = &str> {
        self.choices
            .iter()
            .filter(|(_, choice)| choice.is_required())
            .map(|(name, _)| name.as_str())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Choice)> {
        self.choices
            .iter_mut()
            .map(|(name, choice)| (name.as_str(), choice))
    }
}

#[cfg(test)]
impl Requirements {
    pub fn choice(&self, feature: &str) -> Choice {
        self.choices
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, choice)| *choice)
            .unwrap_or_default()
    }

    /// Records a choice. Features not seen before are appended.
    pub fn set(&mut self, feature: &str, choice: Choice) {
        match self.choices.iter_mut().find(|(name, _)| name == feature) {
            Some((_, existing)) => *existing = choice,
            None => self.choices.push((feature.to_string(), choice)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Choice)> {
        self.choices.iter().map(|(name, choice)| (name.as_str(), *choice))
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
