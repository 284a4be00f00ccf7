use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{NodeLabel, Weight};

/// An edge record that could not be turned into a [`WeightedEdge`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEdgeError {
    #[error("edge record must have exactly 3 fields (origin, destination, length), got {found}")]
    WrongFieldCount { found: usize },

    #[error("edge length {length:?} is not a non-negative integer")]
    InvalidLength { length: String },

    #[error("{text:?} is not of the form origin-length->destination")]
    InvalidNotation { text: String },
}

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct WeightedEdge {
    tail: NodeLabel,
    head: NodeLabel,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: impl Into<NodeLabel>, head: impl Into<NodeLabel>, weight: Weight) -> Self {
        WeightedEdge {
            tail: tail.into(),
            head: head.into(),
            weight,
        }
    }

    /// Parses a record of exactly three fields: origin, destination and
    /// length. Labels are taken verbatim, the length may be surrounded by
    /// whitespace.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, MalformedEdgeError> {
        let [tail, head, length] = fields else {
            return Err(MalformedEdgeError::WrongFieldCount {
                found: fields.len(),
            });
        };

        Ok(WeightedEdge::new(
            tail.as_ref(),
            head.as_ref(),
            parse_length(length.as_ref())?,
        ))
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head.clone(),
            head: self.tail.clone(),
            weight: self.weight,
        }
    }

    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }
}

pub fn parse_length(length: &str) -> Result<Weight, MalformedEdgeError> {
    length
        .trim()
        .parse::<Weight>()
        .map_err(|_| MalformedEdgeError::InvalidLength {
            length: length.to_string(),
        })
}

/// `origin-length->destination`
impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}->{}", self.tail, self.weight, self.head)
    }
}

impl FromStr for WeightedEdge {
    type Err = MalformedEdgeError;

    /// Labels may themselves contain `-` or `->`; the first `-<digits>->`
    /// occurrence separates origin from destination.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.match_indices("->")
            .find_map(|(arrow, _)| {
                let (tail, length) = text[..arrow].rsplit_once('-')?;
                let is_number = !length.is_empty() && length.bytes().all(|b| b.is_ascii_digit());
                if !is_number {
                    return None;
                }
                let weight = length.parse().ok()?;
                Some(WeightedEdge::new(tail, &text[arrow + 2..], weight))
            })
            .ok_or_else(|| MalformedEdgeError::InvalidNotation {
                text: text.to_string(),
            })
    }
}
