//! Protobuf messages returned by the backend's graph data endpoint.
//!
//! These mirror the backend schema field for field; tags must not change.

#![allow(missing_docs)]

/// Cards and review history matching a search.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GraphsOut {
    /// Cards matched by the search.
    #[prost(message, repeated, tag = "1")]
    pub cards: Vec<Card>,
    /// Review log entries for those cards.
    #[prost(message, repeated, tag = "2")]
    pub revlog: Vec<RevlogEntry>,
    /// Days since the collection was created.
    #[prost(uint32, tag = "3")]
    pub days_elapsed: u32,
    /// When the next scheduling day starts, in seconds since the epoch.
    #[prost(uint32, tag = "4")]
    pub next_day_at_secs: u32,
    /// Scheduler version in use.
    #[prost(uint32, tag = "5")]
    pub scheduler_version: u32,
    /// Seconds to add to UTC timestamps to get local time.
    #[prost(sint32, tag = "7")]
    pub local_offset_secs: i32,
}

/// A learning-item record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Card {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(int64, tag = "2")]
    pub note_id: i64,
    #[prost(int64, tag = "3")]
    pub deck_id: i64,
    #[prost(uint32, tag = "4")]
    pub template_idx: u32,
    #[prost(int64, tag = "5")]
    pub mtime_secs: i64,
    #[prost(sint32, tag = "6")]
    pub usn: i32,
    #[prost(uint32, tag = "7")]
    pub ctype: u32,
    #[prost(sint32, tag = "8")]
    pub queue: i32,
    #[prost(sint32, tag = "9")]
    pub due: i32,
    #[prost(uint32, tag = "10")]
    pub interval: u32,
    #[prost(uint32, tag = "11")]
    pub ease_factor: u32,
    #[prost(uint32, tag = "12")]
    pub reps: u32,
    #[prost(uint32, tag = "13")]
    pub lapses: u32,
    #[prost(uint32, tag = "14")]
    pub remaining_steps: u32,
    #[prost(sint32, tag = "15")]
    pub original_due: i32,
    #[prost(int64, tag = "16")]
    pub original_deck_id: i64,
    #[prost(uint32, tag = "17")]
    pub flags: u32,
    #[prost(string, tag = "18")]
    pub data: String,
}

/// A single review event. `id` is the review time in milliseconds.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RevlogEntry {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(int64, tag = "2")]
    pub cid: i64,
    #[prost(int32, tag = "3")]
    pub usn: i32,
    #[prost(uint32, tag = "4")]
    pub button_chosen: u32,
    #[prost(int32, tag = "5")]
    pub interval: i32,
    #[prost(int32, tag = "6")]
    pub last_interval: i32,
    #[prost(uint32, tag = "7")]
    pub ease_factor: u32,
    #[prost(uint32, tag = "8")]
    pub taken_millis: u32,
    #[prost(enumeration = "ReviewKind", tag = "9")]
    pub review_kind: i32,
}

/// Kind of review recorded in a [`RevlogEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ReviewKind {
    Learning = 0,
    Review = 1,
    Relearning = 2,
    EarlyReview = 3,
    Manual = 4,
}
