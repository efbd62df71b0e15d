//! Скачивание файла по ссылке от сервера.
//!
//! Сервер экспорта возвращает готовый `download_url`; клиент инициирует
//! обычное скачивание через временный якорь.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

pub fn open_download_url(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    // Пустой download — имя файла определяет сервер (Content-Disposition).
    anchor.set_download("");
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}
