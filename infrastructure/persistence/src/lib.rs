pub mod db;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod sales {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod settings {
    pub mod repository;
}
