mod registry_tests;
mod validation_tests;

use std::sync::{Arc, Once};

use crate::interfaces::PhoneMetadataProvider;
use fixture_provider::FixtureMetadataProvider;

static ONCE: Once = Once::new();

// This setup function simulates getting the shared provider for each test.
pub(crate) fn get_provider() -> Arc<dyn PhoneMetadataProvider> {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    Arc::new(FixtureMetadataProvider)
}
