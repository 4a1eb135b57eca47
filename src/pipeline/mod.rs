// Research pipeline — keyword sweep, stats join, and channel filters.

pub mod research;
