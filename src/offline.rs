//! Offline asset cache
//!
//! Service worker policy: a single named cache generation holding the
//! static manifest, cache-first for same-origin requests, and the main
//! document as the last resort. The wasm handlers at the bottom are driven
//! by the `sw.js` shim.

/// Current cache generation. Bump to invalidate every client's cache.
pub const CACHE_NAME: &str = "reading-bingo-v1";

/// Static assets cached on install
pub const ASSETS: [&str; 8] = [
    "./",
    "./index.html",
    "./styles.css",
    "./reading-bingo.js",
    "./reading-bingo_bg.wasm",
    "./manifest.json",
    "./icons/icon-192.png",
    "./icons/icon-512.png",
];

/// Served when both cache and network fail
pub const FALLBACK_DOCUMENT: &str = "./index.html";

/// Cache generations to delete when `current` activates
pub fn stale_caches<'a, I>(keys: I, current: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter().filter(|key| *key != current).collect()
}

/// Only requests to our own origin go through the cache
pub fn handles_request(url: &str, origin: &str) -> bool {
    url.starts_with(origin)
}

#[cfg(target_arch = "wasm32")]
mod worker {
    use js_sys::{Array, Promise};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Cache, CacheStorage, Request, Response, WorkerGlobalScope};

    use super::{ASSETS, CACHE_NAME, FALLBACK_DOCUMENT, handles_request, stale_caches};

    fn scope() -> WorkerGlobalScope {
        js_sys::global().unchecked_into::<WorkerGlobalScope>()
    }

    fn caches() -> Result<CacheStorage, JsValue> {
        scope().caches()
    }

    /// Pre-cache the manifest. Failures are logged and never block install.
    #[wasm_bindgen(js_name = swInstall)]
    pub async fn install() {
        match precache().await {
            Ok(cached) => log::info!("Cached {}/{} assets in {}", cached, ASSETS.len(), CACHE_NAME),
            Err(e) => log::warn!("Could not open cache {}: {:?}", CACHE_NAME, e),
        }
    }

    /// Assets are added one by one so a single missing file does not
    /// leave the whole generation empty.
    async fn precache() -> Result<usize, JsValue> {
        let cache: Cache = JsFuture::from(caches()?.open(CACHE_NAME))
            .await?
            .dyn_into()?;
        let mut cached = 0;
        for asset in ASSETS {
            match JsFuture::from(cache.add_with_str(asset)).await {
                Ok(_) => cached += 1,
                Err(e) => log::warn!("Failed to cache {}: {:?}", asset, e),
            }
        }
        Ok(cached)
    }

    /// Purge every cache generation but the current one
    #[wasm_bindgen(js_name = swActivate)]
    pub async fn activate() -> Result<(), JsValue> {
        let storage = caches()?;
        let keys: Array = JsFuture::from(storage.keys()).await?.dyn_into()?;
        let names: Vec<String> = keys.iter().filter_map(|k| k.as_string()).collect();

        for stale in stale_caches(names.iter().map(String::as_str), CACHE_NAME) {
            JsFuture::from(storage.delete(stale)).await?;
            log::info!("Deleted stale cache {}", stale);
        }
        Ok(())
    }

    /// Whether the fetch handler should answer this request
    #[wasm_bindgen(js_name = swHandles)]
    pub fn handles(url: &str, origin: &str) -> bool {
        handles_request(url, origin)
    }

    /// Cache first, then network, then the cached main document
    #[wasm_bindgen(js_name = swRespond)]
    pub fn respond(request: Request) -> Promise {
        wasm_bindgen_futures::future_to_promise(async move {
            match cached_or_network(&request).await {
                Ok(response) => Ok(response.into()),
                Err(e) => {
                    log::warn!("Fetch failed for {}: {:?}", request.url(), e);
                    let fallback = JsFuture::from(caches()?.match_with_str(FALLBACK_DOCUMENT)).await?;
                    Ok(fallback)
                }
            }
        })
    }

    async fn cached_or_network(request: &Request) -> Result<Response, JsValue> {
        let cached = JsFuture::from(caches()?.match_with_request(request)).await?;
        if let Ok(response) = cached.dyn_into::<Response>() {
            return Ok(response);
        }
        JsFuture::from(scope().fetch_with_request(request))
            .await?
            .dyn_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_caches() {
        let keys = ["reading-bingo-v0", CACHE_NAME, "other-app"];
        assert_eq!(
            stale_caches(keys, CACHE_NAME),
            vec!["reading-bingo-v0", "other-app"]
        );
        assert!(stale_caches([CACHE_NAME], CACHE_NAME).is_empty());
    }

    #[test]
    fn test_same_origin_only() {
        let origin = "https://shuflovic.github.io";
        assert!(handles_request(
            "https://shuflovic.github.io/reading_bingo/index.html",
            origin
        ));
        assert!(!handles_request("https://fonts.example.com/a.woff2", origin));
    }

    #[test]
    fn test_manifest_includes_fallback() {
        assert!(ASSETS.contains(&FALLBACK_DOCUMENT));
    }

    #[test]
    fn test_web_manifest_icons_are_cached_and_shipped() {
        let manifest: serde_json::Value =
            serde_json::from_str(include_str!("../manifest.json")).unwrap();
        let icons = manifest["icons"].as_array().unwrap();
        assert!(!icons.is_empty());

        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for icon in icons {
            let src = icon["src"].as_str().unwrap();
            assert!(ASSETS.contains(&src), "{} not pre-cached", src);
            let file = root.join(src.trim_start_matches("./"));
            let bytes = std::fs::read(&file).unwrap();
            assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", src);
        }
    }

    #[test]
    fn test_local_assets_exist() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        // Trunk emits the bundle itself; everything else is a source file
        for asset in ["./index.html", "./styles.css", "./manifest.json"] {
            assert!(root.join(asset.trim_start_matches("./")).is_file(), "{}", asset);
            assert!(ASSETS.contains(&asset));
        }
    }
}
