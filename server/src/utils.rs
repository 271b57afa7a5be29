use response::UsageMetadata;
use tracing::info;

pub fn usage_callback(usage: &UsageMetadata) {
    info!(
        "Usage: prompt_tokens: {}, candidates_tokens: {}, total_tokens: {}",
        usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
    );
}
