pub mod latest;
pub mod list;
pub mod skin_pack;
pub mod version;
