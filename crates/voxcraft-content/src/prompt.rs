use crate::request::ContentRequest;

/// Instructions framing the model as a TTS-oriented writer
pub fn system_prompt(request: &ContentRequest) -> String {
    let mut prompt = format!(
        "You are VoxCraft's AI Content Generator, specialized in creating high-quality {} content \
         optimized for text-to-speech conversion.\n\n\
         Key requirements:\n\
         - Generate {} of content\n\
         - Target audience: {}\n\
         - Style: {}\n\
         - Topic: {}\n\
         - Optimize for voice delivery (clear, flowing sentences)\n",
        request.content_type,
        request.length.word_range(),
        request.audience,
        request.style,
        request.topic,
    );

    if request.voice_suggestions {
        prompt.push_str("- Include voice/character suggestions in [VOICE: character_name] tags\n");
    }

    if request.emotional_cues {
        prompt.push_str("- Include emotional direction in [EMOTION: feeling] tags\n");
    }

    if request.pronunciation_guides {
        prompt.push_str("- Include pronunciation guides for difficult words in [PRONOUNCE: word = pronunciation] tags\n");
    }

    prompt.push_str(
        "\nFormat the response as JSON with:\n\
         - content: The main text content\n\
         - metadata: Object with voice_suggestions, emotional_cues, estimated_duration, recommended_voices array\n\
         - scenes: Array of scene objects if applicable (for scripts/dialogues)\n\
         - tips: Array of voice acting tips for delivery",
    );

    prompt
}

/// The concrete ask
pub fn user_prompt(request: &ContentRequest) -> String {
    let mut prompt = format!(
        "Create a {} about \"{}\" in {} style for {}. Length: {}.",
        request.content_type, request.topic, request.style, request.audience, request.length,
    );

    prompt.push_str(
        "\n\nAdditional context:\n\
         - This will be converted to speech using advanced TTS\n\
         - Include natural pauses and breathing points\n\
         - Make it engaging and suitable for audio consumption",
    );

    prompt
}
