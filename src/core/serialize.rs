//! Purpose: Apply per-type parse rules to validated envelopes.
//! Exports: `dispatch`.
//! Role: Polymorphic construction step; maps (rule, tag, data) to a typed model.
//! Invariants: Rules are pure functions of their inputs; no I/O, no shared state.
//! Invariants: Custom rules reject tags outside their dispatch set with `UnsupportedKind`.

use crate::core::envelope;
use crate::core::error::{Error, ErrorKind};
use crate::core::kind::KindTag;
use crate::core::registry::{ModelType, ParseRule, Registry};
use crate::models::comment_tree::CommentNode;
use crate::models::listing;
use crate::models::model::{FromData, Model};
use crate::models::submission::{Submission, SubmissionBundle};
use crate::models::thing::{
    Account, Award, Comment, CommentMessage, KarmaBreakdown, LiveThread, LiveUpdate, ModAction,
    MoreStub, Multireddit, PrivateMessage, Subreddit, WikiPage, WikiPageSettings,
};
use serde_json::Value;

pub(crate) fn dispatch(
    rule: ParseRule,
    target: ModelType,
    node: &Value,
    tag: KindTag,
    registry: &Registry,
) -> Result<Model, Error> {
    match rule {
        ParseRule::Default => {
            let data = if tag == KindTag::None {
                node
            } else {
                envelope::data_node(node)?
            };
            build(target, data, registry)
        }
        ParseRule::Contribution => {
            let data = envelope::data_node(node)?;
            match tag {
                KindTag::Comment => Ok(Model::Comment(Comment::from_data(data, registry)?)),
                KindTag::Link => Ok(Model::Submission(Submission::from_data(data, registry)?)),
                KindTag::Message => Ok(Model::PrivateMessage(PrivateMessage::from_data(
                    data, registry,
                )?)),
                other => Err(unsupported(other, "contribution")),
            }
        }
        ParseRule::Message => {
            let data = envelope::data_node(node)?;
            match tag {
                KindTag::Comment => Ok(Model::CommentMessage(CommentMessage::from_data(
                    data, registry,
                )?)),
                KindTag::Message => Ok(Model::PrivateMessage(PrivateMessage::from_data(
                    data, registry,
                )?)),
                other => Err(unsupported(other, "message")),
            }
        }
        // The with-comments shape is a raw 2-element array with no kind of its
        // own; callers reach this arm without tag validation.
        ParseRule::Submission => {
            if node.is_array() {
                let bundle = SubmissionBundle::from_array(node, registry)?;
                Ok(Model::SubmissionBundle(bundle))
            } else {
                let data = envelope::data_node(node)?;
                Ok(Model::Submission(Submission::from_data(data, registry)?))
            }
        }
        ParseRule::Listing => {
            let parsed = listing::parse_listing_dynamic(node, registry)?;
            Ok(Model::Listing(parsed))
        }
    }
}

fn unsupported(tag: KindTag, rule: &str) -> Error {
    Error::new(ErrorKind::UnsupportedKind)
        .with_message(format!("kind not handled by the {rule} rule"))
        .with_tag(tag.wire_value().unwrap_or("sentinel"))
}

/// The default rule's construction table: every concrete type's explicit
/// build-from-data function, replacing discovery by reflection.
fn build(target: ModelType, data: &Value, registry: &Registry) -> Result<Model, Error> {
    match target {
        ModelType::Account => Ok(Model::Account(Account::from_data(data, registry)?)),
        ModelType::Award => Ok(Model::Award(Award::from_data(data, registry)?)),
        ModelType::Comment => Ok(Model::Comment(Comment::from_data(data, registry)?)),
        ModelType::CommentMessage => Ok(Model::CommentMessage(CommentMessage::from_data(
            data, registry,
        )?)),
        ModelType::KarmaBreakdown => Ok(Model::KarmaBreakdown(KarmaBreakdown::from_data(
            data, registry,
        )?)),
        ModelType::LiveThread => Ok(Model::LiveThread(LiveThread::from_data(data, registry)?)),
        ModelType::LiveUpdate => Ok(Model::LiveUpdate(LiveUpdate::from_data(data, registry)?)),
        ModelType::ModAction => Ok(Model::ModAction(ModAction::from_data(data, registry)?)),
        ModelType::More => {
            let stub = MoreStub::from_data(data, registry)?;
            if stub.is_exhausted() {
                tracing::warn!("more stub carries no pending children");
            }
            Ok(Model::More(stub))
        }
        ModelType::Multireddit => Ok(Model::Multireddit(Multireddit::from_data(data, registry)?)),
        ModelType::PrivateMessage => Ok(Model::PrivateMessage(PrivateMessage::from_data(
            data, registry,
        )?)),
        ModelType::Submission => Ok(Model::Submission(Submission::from_data(data, registry)?)),
        ModelType::Subreddit => Ok(Model::Subreddit(Subreddit::from_data(data, registry)?)),
        ModelType::WikiPage => Ok(Model::WikiPage(WikiPage::from_data(data, registry)?)),
        ModelType::WikiPageSettings => Ok(Model::WikiPageSettings(WikiPageSettings::from_data(
            data, registry,
        )?)),
        ModelType::Contribution | ModelType::Message | ModelType::Listing => {
            Err(Error::new(ErrorKind::Configuration)
                .with_message(format!("{target:?} has no default build function")))
        }
    }
}

/// Build a `CommentNode` from a dynamically-tagged child of a comment listing.
pub(crate) fn comment_node(node: &Value, registry: &Registry) -> Result<CommentNode, Error> {
    let value = envelope::kind_field(node)?;
    let tag = registry.resolve_tag(value).ok_or_else(|| {
        Error::new(ErrorKind::UnknownKind)
            .with_message("no registered type for kind")
            .with_tag(value)
    })?;
    let data = envelope::data_node(node)?;
    match tag {
        KindTag::Comment => Ok(CommentNode::Comment(Comment::from_data(data, registry)?)),
        KindTag::More => {
            let stub = MoreStub::from_data(data, registry)?;
            if stub.is_exhausted() {
                // Upstream anomaly, not a structural failure; keep the node.
                tracing::warn!("more stub carries no pending children");
            }
            Ok(CommentNode::More(stub))
        }
        other => Err(unsupported(other, "comment tree")),
    }
}
