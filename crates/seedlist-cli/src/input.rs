// User data parsing: JSON categories or free text with detected seed types

use std::fmt;

use regex::Regex;
use serde::Deserialize;

use crate::CliError;

/// Kind of personal information a free-text value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedCategory {
    Birthdate,
    Phone,
    Email,
    Username,
    FullName,
    Name,
    Other,
}

impl SeedCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SeedCategory::Birthdate => "birthdate",
            SeedCategory::Phone => "phone",
            SeedCategory::Email => "email",
            SeedCategory::Username => "username",
            SeedCategory::FullName => "full_name",
            SeedCategory::Name => "name",
            SeedCategory::Other => "other",
        }
    }
}

impl fmt::Display for SeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regex-based detector for [`SeedCategory`].
pub struct SeedClassifier {
    birthdate: Regex,
    phone: Regex,
    email: Regex,
    username: Regex,
    name: Regex,
}

impl SeedClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            birthdate: Regex::new(r"^\d{2,4}[-/.]\d{1,2}[-/.]\d{1,2}$")?,
            phone: Regex::new(r"^\+?[\d\s-]{10,}$")?,
            email: Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$")?,
            username: Regex::new(r"^@[\w._]+$")?,
            name: Regex::new(r"^[A-Za-z\s-]+$")?,
        })
    }

    /// First matching category, checked from most to least specific.
    pub fn classify(&self, value: &str) -> SeedCategory {
        if self.birthdate.is_match(value) {
            SeedCategory::Birthdate
        } else if self.phone.is_match(value) {
            SeedCategory::Phone
        } else if self.email.is_match(value) {
            SeedCategory::Email
        } else if self.username.is_match(value) {
            SeedCategory::Username
        } else if self.name.is_match(value) {
            if value.split_whitespace().count() > 1 {
                SeedCategory::FullName
            } else {
                SeedCategory::Name
            }
        } else {
            SeedCategory::Other
        }
    }
}

/// Categorized personal information, in category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    categories: Vec<(String, Vec<String>)>,
}

impl UserData {
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|(_, values)| values.is_empty())
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn values(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// All values flattened into raw seed tokens, category by category.
    pub fn into_tokens(self) -> Vec<String> {
        self.categories
            .into_iter()
            .flat_map(|(_, values)| values)
            .collect()
    }

    fn push(&mut self, category: &str, value: String) {
        match self.categories.iter_mut().find(|(name, _)| name == category) {
            Some((_, values)) => values.push(value),
            None => self.categories.push((category.to_string(), vec![value])),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    One(String),
    Many(Vec<String>),
}

/// Parse `--user-data` input.
///
/// Input starting with `{` is a JSON object mapping category names to a
/// string or a list of strings; categories keep their order in the input,
/// so the first listed value becomes the first seed token. Anything
/// else is split on commas and newlines and every non-empty value is
/// categorized by `classifier`, with categories in order of first
/// appearance.
pub fn parse_user_data(input: &str, classifier: &SeedClassifier) -> Result<UserData, CliError> {
    let trimmed = input.trim();
    let mut data = UserData::default();

    if trimmed.starts_with('{') {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(trimmed).map_err(|source| CliError::Json {
                context: "--user-data".to_string(),
                source,
            })?;
        for (category, value) in object {
            let entry: JsonEntry =
                serde_json::from_value(value).map_err(|source| CliError::Json {
                    context: format!("--user-data category \"{category}\""),
                    source,
                })?;
            let values = match entry {
                JsonEntry::One(value) => vec![value],
                JsonEntry::Many(values) => values,
            };
            data.categories.push((category, values));
        }
        return Ok(data);
    }

    for value in trimmed
        .split([',', '\n'])
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        let category = classifier.classify(value);
        data.push(category.as_str(), value.to_string());
    }
    Ok(data)
}
