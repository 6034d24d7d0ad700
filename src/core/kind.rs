//! Purpose: Define the closed vocabulary of wire kind tags and its two sentinels.
//! Exports: `KindTag`.
//! Role: Shared tag enum used by descriptors, envelope validation, and dynamic resolution.
//! Invariants: `Abstract` and `None` never appear on the wire and have no wire value.
//! Invariants: `from_wire` is total over strings; unrecognized input maps to `None`.

/// A value of the `kind` field on a wire envelope, plus two sentinels that only
/// appear in descriptors: `Abstract` ("decide at runtime") and `None` ("no tag
/// expected").
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KindTag {
    Abstract,
    None,
    Comment,
    Account,
    Link,
    Message,
    Subreddit,
    Award,
    Listing,
    More,
    Multireddit,
    WikiPage,
    WikiPageSettings,
    LiveThread,
    LiveUpdate,
    KarmaBreakdown,
    ModAction,
}

impl KindTag {
    /// The string this tag takes on the wire. Sentinels have none.
    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            KindTag::Abstract | KindTag::None => None,
            KindTag::Comment => Some("t1"),
            KindTag::Account => Some("t2"),
            KindTag::Link => Some("t3"),
            KindTag::Message => Some("t4"),
            KindTag::Subreddit => Some("t5"),
            KindTag::Award => Some("t6"),
            KindTag::Listing => Some("Listing"),
            KindTag::More => Some("more"),
            KindTag::Multireddit => Some("LabeledMulti"),
            KindTag::WikiPage => Some("wikipage"),
            KindTag::WikiPageSettings => Some("wikipagesettings"),
            KindTag::LiveThread => Some("LiveUpdateEvent"),
            KindTag::LiveUpdate => Some("LiveUpdate"),
            KindTag::KarmaBreakdown => Some("KarmaList"),
            KindTag::ModAction => Some("modaction"),
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "t1" => Some(KindTag::Comment),
            "t2" => Some(KindTag::Account),
            "t3" => Some(KindTag::Link),
            "t4" => Some(KindTag::Message),
            "t5" => Some(KindTag::Subreddit),
            "t6" => Some(KindTag::Award),
            "Listing" => Some(KindTag::Listing),
            "more" => Some(KindTag::More),
            "LabeledMulti" => Some(KindTag::Multireddit),
            "wikipage" => Some(KindTag::WikiPage),
            "wikipagesettings" => Some(KindTag::WikiPageSettings),
            "LiveUpdateEvent" => Some(KindTag::LiveThread),
            "LiveUpdate" => Some(KindTag::LiveUpdate),
            "KarmaList" => Some(KindTag::KarmaBreakdown),
            "modaction" => Some(KindTag::ModAction),
            _ => None,
        }
    }
}
