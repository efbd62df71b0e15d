pub mod p901_sales_summary;
pub mod p902_attendance;
