pub mod role;
pub mod shift;
pub mod summary;
pub mod year_month;
