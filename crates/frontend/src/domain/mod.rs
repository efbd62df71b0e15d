pub mod a001_distributor_order;
pub mod a002_delivery;
pub mod a003_return;
pub mod a004_load_out;
pub mod a005_service_ticket;
