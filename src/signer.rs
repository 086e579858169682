use crate::config::Credentials;

use ring::hmac;

/// Url-encode `params` in the given order, `key=value&key=value`.
pub fn build_query_string<K: AsRef<str>, V: AsRef<str>>(params: &[(K, V)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in params {
        serializer.append_pair(k.as_ref(), v.as_ref());
    }
    serializer.finish()
}

/// Hex encoded HMAC-SHA256 of `payload` keyed by `secret`.
pub fn sign(secret: &str, payload: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    hex::encode(hmac::sign(&key, payload.as_bytes()).as_ref())
}

/// Append `recvWindow` and `timestamp` to the order parameters, sign them, and
/// return `(unsigned, signed)` query strings. Only the signed one is ever sent;
/// the unsigned one is what gets journaled.
pub fn signed_query(
    params: &[(&'static str, String)],
    recv_window_ms: u64,
    timestamp_ms: i64,
    credentials: &Credentials,
) -> (String, String) {
    let mut params = params.to_vec();
    params.push(("recvWindow", recv_window_ms.to_string()));
    params.push(("timestamp", timestamp_ms.to_string()));

    let unsigned = build_query_string(&params);
    let signature = sign(credentials.api_secret(), &unsigned);
    let signed = format!("{}&signature={}", unsigned, signature);
    (unsigned, signed)
}
