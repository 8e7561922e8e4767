pub mod db;
pub mod memory {
    pub mod order_repository;
    pub mod product_repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
