pub(crate) mod base64url;
