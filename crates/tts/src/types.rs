use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{HeaderName, HeaderValue};
use voxcraft_voice::ResolvedRequest;

/// Header carrying the vendor voice ID used for synthesis
pub const VOICE_ID_HEADER: &str = "x-voxcraft-voice-id";
/// Header carrying the age factor derived for the request
pub const AGE_FACTOR_HEADER: &str = "x-voxcraft-age-factor";
/// Header carrying the requested speed multiplier
pub const SPEED_HEADER: &str = "x-voxcraft-speed";
/// Header carrying the requested pitch multiplier
pub const PITCH_HEADER: &str = "x-voxcraft-pitch";

/// Raw audio returned by a TTS vendor
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

/// Audio plus the parameters it was produced with
#[derive(Debug)]
pub struct SpeechResponse {
    pub audio: SpeechAudio,
    pub resolved: ResolvedRequest,
}

impl IntoResponse for SpeechResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.audio.audio));
        let headers = response.headers_mut();

        let content_type = HeaderValue::from_str(&self.audio.content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("audio/mpeg"));
        headers.insert(http::header::CONTENT_TYPE, content_type);

        // Voice IDs pass through from clients and may not be valid header text
        if let Ok(value) = HeaderValue::from_str(&self.resolved.vendor_voice_id) {
            headers.insert(HeaderName::from_static(VOICE_ID_HEADER), value);
        }

        for (name, value) in [
            (AGE_FACTOR_HEADER, self.resolved.age_factor),
            (SPEED_HEADER, self.resolved.speed),
            (PITCH_HEADER, self.resolved.pitch),
        ] {
            if let Ok(value) = HeaderValue::from_str(&value.to_string()) {
                headers.insert(HeaderName::from_static(name), value);
            }
        }

        response
    }
}
