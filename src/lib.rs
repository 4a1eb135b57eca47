// Vidscout: YouTube channel research and video similarity analysis.
//
// This is the library root. Each module corresponds to a major subsystem:
// the YouTube Data API layer, the research pipeline that joins and filters
// search results, and the pure in-memory analysis core (keywords,
// similarity, clustering, trends).

pub mod analysis;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod youtube;
