//! Purpose: Bind each model type to its expected kind, parse rule, and validation flag.
//! Exports: `ModelType`, `ParseRule`, `Descriptor`, `Registry`.
//! Role: Read-only-after-construction table driving envelope validation and dispatch.
//! Invariants: `Registry::standard()` registers every known model type exactly once.
//! Invariants: Descriptors never change after registration; `&Registry` is freely shared.

use crate::core::error::{Error, ErrorKind};
use crate::core::kind::KindTag;
use std::collections::HashMap;

/// Every type the resolver can be asked for. `Contribution` and `Message` are
/// abstract requests resolved to a concrete type from the wire tag.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ModelType {
    Account,
    Award,
    Comment,
    CommentMessage,
    Contribution,
    KarmaBreakdown,
    Listing,
    LiveThread,
    LiveUpdate,
    Message,
    ModAction,
    More,
    Multireddit,
    PrivateMessage,
    Submission,
    Subreddit,
    WikiPage,
    WikiPageSettings,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseRule {
    Default,
    Contribution,
    Message,
    Submission,
    Listing,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Descriptor {
    pub expected_kind: KindTag,
    pub rule: ParseRule,
    pub validate: bool,
}

impl Descriptor {
    pub fn new(expected_kind: KindTag, rule: ParseRule) -> Self {
        Self {
            expected_kind,
            rule,
            validate: true,
        }
    }

    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }
}

pub struct Registry {
    descriptors: HashMap<ModelType, Descriptor>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// The full registration table, mirroring the wire contract: one descriptor
    /// per known model type. Submission skips kind validation because its
    /// with-comments shape is a raw array with no tag of its own.
    pub fn standard() -> Self {
        let table = [
            (
                ModelType::Account,
                Descriptor::new(KindTag::Account, ParseRule::Default),
            ),
            (
                ModelType::Award,
                Descriptor::new(KindTag::Award, ParseRule::Default),
            ),
            (
                ModelType::Comment,
                Descriptor::new(KindTag::Comment, ParseRule::Default),
            ),
            (
                ModelType::CommentMessage,
                Descriptor::new(KindTag::Comment, ParseRule::Default),
            ),
            (
                ModelType::Contribution,
                Descriptor::new(KindTag::Abstract, ParseRule::Contribution),
            ),
            (
                ModelType::KarmaBreakdown,
                Descriptor::new(KindTag::KarmaBreakdown, ParseRule::Default),
            ),
            (
                ModelType::Listing,
                Descriptor::new(KindTag::Listing, ParseRule::Listing),
            ),
            (
                ModelType::LiveThread,
                Descriptor::new(KindTag::LiveThread, ParseRule::Default),
            ),
            (
                ModelType::LiveUpdate,
                Descriptor::new(KindTag::LiveUpdate, ParseRule::Default),
            ),
            (
                ModelType::Message,
                Descriptor::new(KindTag::Abstract, ParseRule::Message),
            ),
            (
                ModelType::ModAction,
                Descriptor::new(KindTag::ModAction, ParseRule::Default),
            ),
            (
                ModelType::More,
                Descriptor::new(KindTag::More, ParseRule::Default),
            ),
            (
                ModelType::Multireddit,
                Descriptor::new(KindTag::Multireddit, ParseRule::Default),
            ),
            (
                ModelType::PrivateMessage,
                Descriptor::new(KindTag::Message, ParseRule::Default),
            ),
            (
                ModelType::Submission,
                Descriptor::new(KindTag::Link, ParseRule::Submission).without_validation(),
            ),
            (
                ModelType::Subreddit,
                Descriptor::new(KindTag::Subreddit, ParseRule::Default),
            ),
            (
                ModelType::WikiPage,
                Descriptor::new(KindTag::WikiPage, ParseRule::Default),
            ),
            (
                ModelType::WikiPageSettings,
                Descriptor::new(KindTag::WikiPageSettings, ParseRule::Default),
            ),
        ];
        Self {
            descriptors: HashMap::from(table),
        }
    }

    /// Attach a descriptor to a type. Registering the same type twice is a
    /// configuration error; descriptors are never replaced.
    pub fn register(&mut self, model: ModelType, descriptor: Descriptor) -> Result<(), Error> {
        if self.descriptors.contains_key(&model) {
            return Err(Error::new(ErrorKind::Configuration)
                .with_message(format!("descriptor already registered for {model:?}")));
        }
        self.descriptors.insert(model, descriptor);
        Ok(())
    }

    pub fn lookup(&self, model: ModelType) -> Result<&Descriptor, Error> {
        self.descriptors.get(&model).ok_or_else(|| {
            Error::new(ErrorKind::Configuration)
                .with_message(format!("no descriptor registered for {model:?}"))
        })
    }

    pub fn resolve_tag(&self, value: &str) -> Option<KindTag> {
        KindTag::from_wire(value)
    }

    /// The type instantiated when an abstract request resolves to `tag`.
    /// `Message` maps back to the abstract message type so its own rule picks
    /// between comment and private messages.
    pub fn default_type_for(&self, tag: KindTag) -> Result<ModelType, Error> {
        let model = match tag {
            KindTag::Comment => ModelType::Comment,
            KindTag::Account => ModelType::Account,
            KindTag::Link => ModelType::Submission,
            KindTag::Message => ModelType::Message,
            KindTag::Subreddit => ModelType::Subreddit,
            KindTag::Award => ModelType::Award,
            KindTag::Listing => ModelType::Listing,
            KindTag::More => ModelType::More,
            KindTag::Multireddit => ModelType::Multireddit,
            KindTag::WikiPage => ModelType::WikiPage,
            KindTag::WikiPageSettings => ModelType::WikiPageSettings,
            KindTag::LiveThread => ModelType::LiveThread,
            KindTag::LiveUpdate => ModelType::LiveUpdate,
            KindTag::KarmaBreakdown => ModelType::KarmaBreakdown,
            KindTag::ModAction => ModelType::ModAction,
            KindTag::Abstract | KindTag::None => {
                return Err(Error::new(ErrorKind::UnknownKind)
                    .with_message("sentinel kinds have no default type"));
            }
        };
        Ok(model)
    }
}
