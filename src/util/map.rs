//! Third-party map embed for the contact page.
//!
//! The map library (loaded from its own script tag, entirely outside this
//! crate) exposes a global `google.maps.Map` constructor taking
//! `(container, {center: {lat, lng}, zoom})` and a `google.maps.Marker`
//! constructor taking `({position, map, title})`. The constructors are
//! looked up reflectively so a missing or failed library is caught and
//! logged as a warning; the page stays usable either way.

/// Where to center the map and what the marker says.
#[derive(Clone, Copy, Debug)]
pub struct MapConfig {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
    pub title: &'static str,
}

/// Construct the map and marker inside the element with `container_id`.
/// Any failure is logged and swallowed.
pub fn embed(container_id: &str, config: &MapConfig) {
    #[cfg(feature = "csr")]
    {
        if let Err(err) = try_embed(container_id, config) {
            leptos::logging::warn!("map embed unavailable: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container_id, config);
    }
}

#[cfg(feature = "csr")]
fn try_embed(container_id: &str, config: &MapConfig) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let container = window
        .document()
        .and_then(|d| d.get_element_by_id(container_id))
        .ok_or_else(|| JsValue::from_str("map container missing"))?;

    let maps = js_sys::Reflect::get(&window, &"google".into())
        .and_then(|google| js_sys::Reflect::get(&google, &"maps".into()))?;
    if maps.is_undefined() || maps.is_null() {
        return Err(JsValue::from_str("maps library not loaded"));
    }

    let center = js_sys::Object::new();
    js_sys::Reflect::set(&center, &"lat".into(), &config.lat.into())?;
    js_sys::Reflect::set(&center, &"lng".into(), &config.lng.into())?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"center".into(), &center)?;
    js_sys::Reflect::set(&options, &"zoom".into(), &config.zoom.into())?;

    let map_ctor: js_sys::Function =
        js_sys::Reflect::get(&maps, &"Map".into())?.dyn_into()?;
    let map = js_sys::Reflect::construct(
        &map_ctor,
        &js_sys::Array::of2(container.as_ref(), &options),
    )?;

    let marker_opts = js_sys::Object::new();
    js_sys::Reflect::set(&marker_opts, &"position".into(), &center)?;
    js_sys::Reflect::set(&marker_opts, &"map".into(), &map)?;
    js_sys::Reflect::set(&marker_opts, &"title".into(), &config.title.into())?;

    let marker_ctor: js_sys::Function =
        js_sys::Reflect::get(&maps, &"Marker".into())?.dyn_into()?;
    js_sys::Reflect::construct(&marker_ctor, &js_sys::Array::of1(&marker_opts))?;

    Ok(())
}
