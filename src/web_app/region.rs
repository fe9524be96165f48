// web_app/region.rs - Where the checkout learns the customer's state
//
// The shipping form never reads browser storage directly. It asks a
// `RegionProvider`, which wraps whatever `RegionSource` the app (or a test)
// installed. In the browser the default source is the `shipmentState`
// entry of localStorage.

use std::fmt;
use std::sync::Arc;

use crate::web_app::model::Region;

/// localStorage key holding the customer's state code.
pub const SHIPMENT_STATE_KEY: &str = "shipmentState";

/// Anything that can hint at the customer's region.
pub trait RegionSource: Send + Sync {
    /// Raw stored value, if any.
    fn region_hint(&self) -> Option<String>;
}

/// A fixed answer; used on the server and in tests.
#[derive(Clone, Debug, Default)]
pub struct FixedRegion(Option<String>);

impl FixedRegion {
    pub fn new(code: impl Into<String>) -> Self {
        Self(Some(code.into()))
    }

    /// A source that never has a value, so the default region applies.
    pub fn unset() -> Self {
        Self(None)
    }
}

impl RegionSource for FixedRegion {
    fn region_hint(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads [`SHIPMENT_STATE_KEY`] from `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageRegion;

#[cfg(feature = "hydrate")]
impl RegionSource for LocalStorageRegion {
    fn region_hint(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(SHIPMENT_STATE_KEY).ok().flatten()
    }
}

#[cfg(not(feature = "hydrate"))]
impl RegionSource for LocalStorageRegion {
    fn region_hint(&self) -> Option<String> {
        None
    }
}

/// Cloneable handle shared through props or Leptos context.
#[derive(Clone)]
pub struct RegionProvider {
    source: Arc<dyn RegionSource>,
}

impl RegionProvider {
    pub fn new(source: impl RegionSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// The source an app gets when nothing was injected.
    pub fn ambient() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "hydrate")] {
                Self::new(LocalStorageRegion)
            } else {
                Self::new(FixedRegion::unset())
            }
        }
    }

    /// Current region; only a missing or empty value falls back to the default.
    pub fn current_region(&self) -> Region {
        Region::from_hint(self.source.region_hint().as_deref())
    }
}

impl Default for RegionProvider {
    fn default() -> Self {
        Self::ambient()
    }
}

impl fmt::Debug for RegionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::{ShippingZone, DEFAULT_REGION};
    use std::sync::Mutex;

    struct Scripted(Mutex<Vec<Option<String>>>);

    impl RegionSource for Scripted {
        fn region_hint(&self) -> Option<String> {
            self.0.lock().unwrap().pop().flatten()
        }
    }

    #[test]
    fn test_fixed_region() {
        let provider = RegionProvider::new(FixedRegion::new("mg"));
        let region = provider.current_region();
        assert_eq!(region.code(), "mg");
        assert_eq!(region.zone(), ShippingZone::Extended);
    }

    #[test]
    fn test_unset_region_defaults() {
        let provider = RegionProvider::new(FixedRegion::unset());
        assert_eq!(provider.current_region().code(), DEFAULT_REGION);
    }

    #[test]
    fn test_empty_hint_defaults() {
        let provider = RegionProvider::new(FixedRegion::new(""));
        assert_eq!(provider.current_region().code(), DEFAULT_REGION);
    }

    #[test]
    fn test_malformed_hint_is_kept_verbatim() {
        for hint in ["rj", " SP", "São Paulo", "XYZ"] {
            let region = RegionProvider::new(FixedRegion::new(hint)).current_region();
            assert_eq!(region.code(), hint);
            assert_eq!(region.zone(), ShippingZone::Extended);
        }
    }

    #[test]
    fn test_source_is_read_on_every_lookup() {
        let script = Scripted(Mutex::new(vec![Some("BA".to_string()), None]));
        let provider = RegionProvider::new(script);

        assert_eq!(provider.current_region().code(), DEFAULT_REGION);
        assert_eq!(provider.current_region().code(), "BA");
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_ambient_outside_browser_is_default() {
        assert_eq!(RegionProvider::ambient().current_region().code(), DEFAULT_REGION);
    }
}
