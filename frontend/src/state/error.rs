use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("{widget} needs at least one item")]
    EmptyCollection { widget: &'static str },
    #[error("unknown page '{0}'")]
    InvalidPage(String),
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Why an email address was refused by the lead form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Please enter your work email.")]
    Empty,
    #[error("Email addresses can't contain spaces.")]
    Whitespace,
    #[error("That doesn't look like an email address, it's missing an '@'.")]
    MissingAt,
    #[error("Email addresses can only contain one '@'.")]
    MultipleAt,
    #[error("Please add the part before the '@'.")]
    EmptyLocalPart,
    #[error("Please check the domain after the '@' (for example company.com).")]
    InvalidDomain,
}
