pub mod delivery_status_query;
pub mod multiple_delivery_orders;
pub mod pickup_order;
pub mod shipment_list_query;
pub mod shipping_rate_query;
