use http::Method;
use http::header::HeaderName;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use voxcraft_config::{AnyOrArray, CorsConfig};

/// Build a Tower CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    layer = match &config.origins {
        AnyOrArray::Any => layer.allow_origin(AllowOrigin::any()),
        AnyOrArray::List(origins) => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(origins)
        }
    };

    layer = match &config.methods {
        AnyOrArray::Any => layer.allow_methods(AllowMethods::any()),
        AnyOrArray::List(methods) => {
            let methods: Vec<Method> = methods.iter().filter_map(|m| m.parse().ok()).collect();
            layer.allow_methods(methods)
        }
    };

    layer = match &config.headers {
        AnyOrArray::Any => layer.allow_headers(AllowHeaders::any()),
        AnyOrArray::List(headers) => {
            let headers: Vec<HeaderName> = headers.iter().filter_map(|h| h.parse().ok()).collect();
            layer.allow_headers(headers)
        }
    };

    // Browsers only let scripts read the derived speech headers when exposed
    let mut expose: Vec<HeaderName> = [
        tts::VOICE_ID_HEADER,
        tts::AGE_FACTOR_HEADER,
        tts::SPEED_HEADER,
        tts::PITCH_HEADER,
    ]
    .into_iter()
    .map(HeaderName::from_static)
    .collect();
    expose.extend(config.expose_headers.iter().filter_map(|h| h.parse().ok()));
    layer = layer.expose_headers(expose);

    // tower-http rejects credentials combined with any wildcard
    if config.credentials {
        let wildcard = [&config.origins, &config.methods, &config.headers]
            .into_iter()
            .any(|v| matches!(v, AnyOrArray::Any));

        if wildcard {
            tracing::warn!("CORS credentials ignored: origins, methods and headers must be explicit lists");
        } else {
            layer = layer.allow_credentials(true);
        }
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
