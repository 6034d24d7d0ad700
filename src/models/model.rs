//! Purpose: Define the closed result type of the resolver and the construction protocol.
//! Exports: `Model`, `FromData`, `parse_as`.
//! Role: Replaces runtime downcasting with one exhaustively matchable enum.
//! Invariants: Every concrete model type has exactly one `Model` variant.
//! Invariants: `FromData` is the only construction path; no reflection, no fallbacks.

use crate::core::envelope;
use crate::core::error::Error;
use crate::core::kind::KindTag;
use crate::core::registry::{ModelType, Registry};
use crate::models::listing::Listing;
use crate::models::submission::{Submission, SubmissionBundle};
use crate::models::thing::{
    Account, Award, Comment, CommentMessage, KarmaBreakdown, LiveThread, LiveUpdate, ModAction,
    MoreStub, Multireddit, PrivateMessage, Subreddit, WikiPage, WikiPageSettings,
};
use serde_json::Value;

/// The explicit build-from-data protocol. Each concrete model names its
/// registered type and constructs itself from a `data` node; the registry is
/// threaded through for nested enveloped fields.
pub trait FromData: Sized {
    const MODEL: ModelType;

    fn from_data(data: &Value, registry: &Registry) -> Result<Self, Error>;
}

/// Validate an envelope against `T`'s descriptor and build a `T` from its data
/// node. Used for statically-typed listing children and nested enveloped
/// fields.
pub fn parse_as<T: FromData>(node: &Value, registry: &Registry) -> Result<T, Error> {
    let data = envelope::data_for(node, T::MODEL, registry)?;
    T::from_data(data, registry)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Model {
    Account(Account),
    Award(Award),
    Comment(Comment),
    CommentMessage(CommentMessage),
    KarmaBreakdown(KarmaBreakdown),
    Listing(Listing<Model>),
    LiveThread(LiveThread),
    LiveUpdate(LiveUpdate),
    ModAction(ModAction),
    More(MoreStub),
    Multireddit(Multireddit),
    PrivateMessage(PrivateMessage),
    Submission(Submission),
    SubmissionBundle(SubmissionBundle),
    Subreddit(Subreddit),
    WikiPage(WikiPage),
    WikiPageSettings(WikiPageSettings),
}

impl Model {
    /// The wire kind this model was resolved from. Bundles report the link
    /// kind of the submission they carry.
    pub fn kind(&self) -> KindTag {
        match self {
            Model::Account(_) => KindTag::Account,
            Model::Award(_) => KindTag::Award,
            Model::Comment(_) => KindTag::Comment,
            Model::CommentMessage(_) => KindTag::Comment,
            Model::KarmaBreakdown(_) => KindTag::KarmaBreakdown,
            Model::Listing(_) => KindTag::Listing,
            Model::LiveThread(_) => KindTag::LiveThread,
            Model::LiveUpdate(_) => KindTag::LiveUpdate,
            Model::ModAction(_) => KindTag::ModAction,
            Model::More(_) => KindTag::More,
            Model::Multireddit(_) => KindTag::Multireddit,
            Model::PrivateMessage(_) => KindTag::Message,
            Model::Submission(_) | Model::SubmissionBundle(_) => KindTag::Link,
            Model::Subreddit(_) => KindTag::Subreddit,
            Model::WikiPage(_) => KindTag::WikiPage,
            Model::WikiPageSettings(_) => KindTag::WikiPageSettings,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Model::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    pub fn as_submission(&self) -> Option<&Submission> {
        match self {
            Model::Submission(submission) => Some(submission),
            Model::SubmissionBundle(bundle) => Some(&bundle.submission),
            _ => None,
        }
    }

    pub fn as_listing(&self) -> Option<&Listing<Model>> {
        match self {
            Model::Listing(listing) => Some(listing),
            _ => None,
        }
    }
}
