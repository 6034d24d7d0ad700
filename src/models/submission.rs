//! Purpose: Build submissions from their two incompatible wire shapes.
//! Exports: `Submission`, `SubmissionBundle`.
//! Role: Handles the one payload in the API that is a raw array instead of an envelope.
//! Invariants: The array shape is exactly two enveloped listings; element 0 donates
//! the submission's fields, element 1 becomes the comment tree.

use crate::core::envelope;
use crate::core::error::{Error, ErrorKind};
use crate::core::registry::{ModelType, Registry};
use crate::json::parse;
use crate::models::comment_tree::{self, CommentNode};
use crate::models::listing::{self, Listing};
use crate::models::model::FromData;
use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Submission {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub subreddit: Option<String>,
    pub selftext: Option<String>,
    pub url: Option<String>,
    pub permalink: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
    #[serde(default)]
    pub over_18: bool,
}

impl FromData for Submission {
    const MODEL: ModelType = ModelType::Submission;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

/// A submission paired with its root comment tree, produced only by the
/// 2-element array shape.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionBundle {
    pub submission: Submission,
    pub comments: Listing<CommentNode>,
}

impl SubmissionBundle {
    /// Assemble from the raw array shape: `[listing-of-one-submission,
    /// listing-of-comments]`. The first listing exists only to donate its
    /// single child's `data` as the submission's fields.
    pub(crate) fn from_array(node: &Value, registry: &Registry) -> Result<Self, Error> {
        let items = node.as_array().ok_or_else(|| {
            Error::new(ErrorKind::Construction)
                .with_message("submission-with-comments payload is not an array")
        })?;
        if items.len() != 2 {
            return Err(Error::new(ErrorKind::Construction).with_message(format!(
                "submission-with-comments payload must have 2 elements, got {}",
                items.len()
            )));
        }

        let donor_data = envelope::data_for(&items[0], ModelType::Listing, registry)?;
        let donor = listing::children_array(donor_data)?.first().ok_or_else(|| {
            Error::new(ErrorKind::Construction)
                .with_message("submission listing carries no children")
        })?;
        let submission_data = envelope::data_for(donor, ModelType::Submission, registry)?;
        let submission = Submission::from_data(submission_data, registry)?;

        let comments = comment_tree::parse_comment_tree(&items[1], registry)?;
        Ok(Self {
            submission,
            comments,
        })
    }
}
