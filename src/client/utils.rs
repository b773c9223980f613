use secrecy::ExposeSecret;

use crate::client::config::Config;

/// Builds the connection URL, embedding the access credential as a query
/// parameter per the live API convention.
pub fn build_url(config: &Config) -> String {
    format!(
        "{}?key={}",
        config.base_url(),
        config.api_key().expose_secret()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_embeds_key_as_query_parameter() {
        let config = Config::builder()
            .with_base_url("wss://example.test/bidi")
            .with_api_key("secret-key")
            .build();
        assert_eq!(build_url(&config), "wss://example.test/bidi?key=secret-key");
    }
}
