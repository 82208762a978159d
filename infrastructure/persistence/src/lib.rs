pub mod db;
pub mod session_storage {
    pub mod entity;
    pub mod memory;
    pub mod purge;
    pub mod repository;
}
