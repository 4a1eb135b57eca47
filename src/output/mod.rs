// Result presentation — colored terminal tables and CSV export.

pub mod csv;
pub mod terminal;
