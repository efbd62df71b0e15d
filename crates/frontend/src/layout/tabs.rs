//! Подписи вкладок по ключу страницы.

pub fn tab_label_for_key(key: &str) -> &'static str {
    if key.starts_with("a001_distributor_order_detail_") {
        return "Заказ дистрибьютора";
    }
    match key {
        "a001_distributor_order" => "Заказы дистрибьюторов",
        "a002_delivery" => "Доставки",
        "a003_return" => "Возвраты",
        "a004_load_out" => "Загрузки агентов",
        "a005_service_ticket" => "Сервисные заявки",
        "p901_sales_summary" => "Отчёт по продажам",
        "p902_attendance" => "Посещаемость",
        _ => "Страница",
    }
}
