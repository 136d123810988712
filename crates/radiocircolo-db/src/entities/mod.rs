pub mod podcast;
