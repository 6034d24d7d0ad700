//! Purpose: Concrete typed models built from envelope data nodes.
//! Exports: `Account`, `Comment`, `MoreStub`, message/subreddit/wiki/live/mod types.
//! Role: Field mapping for every wire kind except submissions and listings.
//! Invariants: Nullable wire fields are `Option`; absent counters default to zero.
//! Invariants: Nested enveloped fields re-enter the envelope resolver.

use crate::core::error::Error;
use crate::core::registry::{ModelType, Registry};
use crate::json::parse;
use crate::models::comment_tree::{self, CommentNode};
use crate::models::listing::Listing;
use crate::models::model::{FromData, parse_as};
use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Account {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub link_karma: i64,
    #[serde(default)]
    pub comment_karma: i64,
    pub created_utc: Option<f64>,
    pub is_gold: Option<bool>,
    pub is_mod: Option<bool>,
}

impl FromData for Account {
    const MODEL: ModelType = ModelType::Account;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Award {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

impl FromData for Award {
    const MODEL: ModelType = ModelType::Award;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

/// A comment together with its reply tree. The wire encodes "no replies" as an
/// empty string (or null), which maps to an empty leaf listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub author: String,
    pub body: String,
    pub subreddit: Option<String>,
    pub parent_id: Option<String>,
    pub link_id: Option<String>,
    pub score: i64,
    pub created_utc: Option<f64>,
    pub replies: Listing<CommentNode>,
}

#[derive(Deserialize)]
struct CommentFields {
    id: Option<String>,
    name: Option<String>,
    author: String,
    body: String,
    subreddit: Option<String>,
    parent_id: Option<String>,
    link_id: Option<String>,
    #[serde(default)]
    score: i64,
    created_utc: Option<f64>,
}

impl FromData for Comment {
    const MODEL: ModelType = ModelType::Comment;

    fn from_data(data: &Value, registry: &Registry) -> Result<Self, Error> {
        let fields: CommentFields = parse::decode(data)?;
        let replies = match data.get("replies") {
            Some(node @ Value::Object(_)) => comment_tree::parse_comment_tree(node, registry)?,
            _ => Listing::empty(),
        };
        Ok(Self {
            id: fields.id,
            name: fields.name,
            author: fields.author,
            body: fields.body,
            subreddit: fields.subreddit,
            parent_id: fields.parent_id,
            link_id: fields.link_id,
            score: fields.score,
            created_utc: fields.created_utc,
            replies,
        })
    }
}

/// A reply to one of the user's comments or submissions, delivered to the
/// inbox with comment context.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommentMessage {
    pub id: Option<String>,
    pub author: Option<String>,
    pub body: String,
    pub subject: Option<String>,
    pub subreddit: Option<String>,
    pub parent_id: Option<String>,
    pub link_title: Option<String>,
    pub context: Option<String>,
    #[serde(default)]
    pub was_comment: bool,
    #[serde(rename = "new", default)]
    pub unread: bool,
}

impl FromData for CommentMessage {
    const MODEL: ModelType = ModelType::CommentMessage;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PrivateMessage {
    pub id: Option<String>,
    pub author: Option<String>,
    pub body: String,
    pub subject: Option<String>,
    pub subreddit: Option<String>,
    pub parent_id: Option<String>,
    pub first_message_name: Option<String>,
    #[serde(default)]
    pub was_comment: bool,
    #[serde(rename = "new", default)]
    pub unread: bool,
}

impl FromData for PrivateMessage {
    const MODEL: ModelType = ModelType::PrivateMessage;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Subreddit {
    pub id: Option<String>,
    pub display_name: String,
    pub title: Option<String>,
    pub public_description: Option<String>,
    pub subscribers: Option<i64>,
    pub over18: Option<bool>,
    pub url: Option<String>,
}

impl FromData for Subreddit {
    const MODEL: ModelType = ModelType::Subreddit;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

/// A continuation stub: identifiers of sibling content the API did not
/// include. Expanding it is the paginator's job, never the core's.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MoreStub {
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub children: Vec<String>,
}

impl MoreStub {
    /// True when the stub carries no pending ids: an upstream anomaly that is
    /// surfaced rather than treated as a parse failure.
    pub fn is_exhausted(&self) -> bool {
        self.children.is_empty()
    }
}

impl FromData for MoreStub {
    const MODEL: ModelType = ModelType::More;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MultiSubreddit {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Multireddit {
    pub name: String,
    pub display_name: Option<String>,
    pub path: Option<String>,
    pub visibility: Option<String>,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub subreddits: Vec<MultiSubreddit>,
}

impl FromData for Multireddit {
    const MODEL: ModelType = ModelType::Multireddit;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

/// A wiki page revision. The revising author arrives as a nested account
/// envelope and re-enters the resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct WikiPage {
    pub content_md: Option<String>,
    pub may_revise: bool,
    pub revision_date: Option<f64>,
    pub revision_by: Option<Account>,
}

#[derive(Deserialize)]
struct WikiPageFields {
    content_md: Option<String>,
    #[serde(default)]
    may_revise: bool,
    revision_date: Option<f64>,
}

impl FromData for WikiPage {
    const MODEL: ModelType = ModelType::WikiPage;

    fn from_data(data: &Value, registry: &Registry) -> Result<Self, Error> {
        let fields: WikiPageFields = parse::decode(data)?;
        let revision_by = match data.get("revision_by") {
            Some(node @ Value::Object(_)) => Some(parse_as::<Account>(node, registry)?),
            _ => None,
        };
        Ok(Self {
            content_md: fields.content_md,
            may_revise: fields.may_revise,
            revision_date: fields.revision_date,
            revision_by,
        })
    }
}

/// Wiki page settings; editors arrive as an array of account envelopes.
#[derive(Clone, Debug, PartialEq)]
pub struct WikiPageSettings {
    pub permlevel: i64,
    pub listed: bool,
    pub editors: Vec<Account>,
}

#[derive(Deserialize)]
struct WikiPageSettingsFields {
    #[serde(default)]
    permlevel: i64,
    #[serde(default)]
    listed: bool,
}

impl FromData for WikiPageSettings {
    const MODEL: ModelType = ModelType::WikiPageSettings;

    fn from_data(data: &Value, registry: &Registry) -> Result<Self, Error> {
        let fields: WikiPageSettingsFields = parse::decode(data)?;
        let mut editors = Vec::new();
        if let Some(Value::Array(nodes)) = data.get("editors") {
            for node in nodes {
                editors.push(parse_as::<Account>(node, registry)?);
            }
        }
        Ok(Self {
            permlevel: fields.permlevel,
            listed: fields.listed,
            editors,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LiveThread {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub state: Option<String>,
    pub websocket_url: Option<String>,
    pub viewer_count: Option<i64>,
}

impl FromData for LiveThread {
    const MODEL: ModelType = ModelType::LiveThread;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LiveUpdate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub author: Option<String>,
    pub body: String,
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub stricken: bool,
}

impl FromData for LiveUpdate {
    const MODEL: ModelType = ModelType::LiveUpdate;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct KarmaEntry {
    pub sr: String,
    #[serde(default)]
    pub link_karma: i64,
    #[serde(default)]
    pub comment_karma: i64,
}

/// Per-subreddit karma summary. Unusually, this model's `data` node is a JSON
/// array rather than an object.
#[derive(Clone, Debug, PartialEq)]
pub struct KarmaBreakdown {
    pub entries: Vec<KarmaEntry>,
}

impl FromData for KarmaBreakdown {
    const MODEL: ModelType = ModelType::KarmaBreakdown;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        let entries = parse::decode(data)?;
        Ok(Self { entries })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModAction {
    pub id: Option<String>,
    pub action: String,
    #[serde(rename = "mod")]
    pub moderator: Option<String>,
    pub target_fullname: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub subreddit: Option<String>,
    pub created_utc: Option<f64>,
}

impl FromData for ModAction {
    const MODEL: ModelType = ModelType::ModAction;

    fn from_data(data: &Value, _registry: &Registry) -> Result<Self, Error> {
        parse::decode(data)
    }
}
