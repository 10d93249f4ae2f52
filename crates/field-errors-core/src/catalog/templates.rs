//! Built-in message templates.
//!
//! Placeholders: `{field}` is the subject's public name, `{param}` the raw
//! constraint parameter.

use super::Arity::{self, FieldRef, Size, Subject, WithParam};

/// Length phrasing shared by the size family.
pub(crate) const LENGTH: &str = "the field '{field}' must have a length of {param}";

/// Magnitude phrasing for `min` on non-text values.
pub(crate) const MIN_MAGNITUDE: &str = "the field '{field}' must be at least {param}";

/// Magnitude phrasing for `max` on non-text values.
pub(crate) const MAX_MAGNITUDE: &str = "the field '{field}' must be no more than {param}";

/// Magnitude phrasing for a size-family tag. `len` has none: it always
/// reads as a length.
pub(crate) fn magnitude_for(tag: &str) -> Option<&'static str> {
    match tag {
        "min" => Some(MIN_MAGNITUDE),
        "max" => Some(MAX_MAGNITUDE),
        _ => None,
    }
}

pub(crate) const BUILTIN: &[(&str, Arity, &str)] = &[
    // Field-to-field comparisons (param is the other field's internal name)
    ("eqcsfield", FieldRef, "the field '{field}' must be equal to the field '{param}'"),
    ("eqfield", FieldRef, "the field '{field}' must be equal to the field '{param}'"),
    ("gtcsfield", FieldRef, "the field '{field}' must be greater than the field '{param}'"),
    (
        "gtecsfield",
        FieldRef,
        "the field '{field}' must be greater than or equal to the field '{param}'",
    ),
    (
        "gtefield",
        FieldRef,
        "the field '{field}' must be greater than or equal to the field '{param}'",
    ),
    ("gtfield", FieldRef, "the field '{field}' must be greater than the field '{param}'"),
    ("ltcsfield", FieldRef, "the field '{field}' must be less than the field '{param}'"),
    (
        "ltecsfield",
        FieldRef,
        "the field '{field}' must be less than or equal to the field '{param}'",
    ),
    (
        "ltefield",
        FieldRef,
        "the field '{field}' must be less than or equal to the field '{param}'",
    ),
    ("ltfield", FieldRef, "the field '{field}' must be less than the field '{param}'"),
    ("necsfield", FieldRef, "the field '{field}' must not be equal to the field '{param}'"),
    ("nefield", FieldRef, "the field '{field}' must not be equal to the field '{param}'"),

    // Network
    ("cidr", Subject, "the field '{field}' must be a valid CIDR notation"),
    ("cidrv4", Subject, "the field '{field}' must be a valid IPv4 CIDR notation"),
    ("cidrv6", Subject, "the field '{field}' must be a valid IPv6 CIDR notation"),
    ("datauri", Subject, "the field '{field}' must be a valid data URI"),
    ("fqdn", Subject, "the field '{field}' must be a valid fully qualified domain name"),
    ("hostname", Subject, "the field '{field}' must be a valid hostname according to RFC 952"),
    ("hostname_port", Subject, "the field '{field}' must be a valid host:port format"),
    (
        "hostname_rfc1123",
        Subject,
        "the field '{field}' must be a valid hostname according to RFC 1123",
    ),
    ("ip", Subject, "the field '{field}' must be a valid IP address"),
    ("ip4_addr", Subject, "the field '{field}' must be a valid IPv4 address"),
    ("ip6_addr", Subject, "the field '{field}' must be a valid IPv6 address"),
    ("ip_addr", Subject, "the field '{field}' must be a valid IP address"),
    ("ipv4", Subject, "the field '{field}' must be a valid IPv4 address"),
    ("ipv6", Subject, "the field '{field}' must be a valid IPv6 address"),
    ("mac", Subject, "the field '{field}' must be a valid MAC address"),
    ("tcp4_addr", Subject, "the field '{field}' must be a valid TCP IPv4 address"),
    ("tcp6_addr", Subject, "the field '{field}' must be a valid TCP IPv6 address"),
    ("tcp_addr", Subject, "the field '{field}' must be a valid TCP address"),
    ("udp4_addr", Subject, "the field '{field}' must be a valid UDP IPv4 address"),
    ("udp6_addr", Subject, "the field '{field}' must be a valid UDP IPv6 address"),
    ("udp_addr", Subject, "the field '{field}' must be a valid UDP address"),
    ("unix_addr", Subject, "the field '{field}' must be a valid Unix domain socket address"),
    ("uri", Subject, "the field '{field}' must be a valid URI"),
    ("url", Subject, "the field '{field}' must be a valid URL"),
    ("http_url", Subject, "the field '{field}' must be a valid HTTP URL"),
    ("url_encoded", Subject, "the field '{field}' must be a valid URL encoded string"),
    ("urn_rfc2141", Subject, "the field '{field}' must be a valid URN according to RFC 2141"),

    // Text content
    ("alpha", Subject, "the field '{field}' must contain only alphabetic characters"),
    ("alphanum", Subject, "the field '{field}' must contain only alphanumeric characters"),
    (
        "alphanumunicode",
        Subject,
        "the field '{field}' must contain only alphanumeric Unicode characters",
    ),
    (
        "alphaunicode",
        Subject,
        "the field '{field}' must contain only alphabetic Unicode characters",
    ),
    ("ascii", Subject, "the field '{field}' must contain only ASCII characters"),
    ("boolean", Subject, "the field '{field}' must be a valid boolean value"),
    ("contains", WithParam, "the field '{field}' must contain the text '{param}'"),
    ("containsany", WithParam, "the field '{field}' must contain any of the characters '{param}'"),
    ("containsrune", WithParam, "the field '{field}' must contain the character '{param}'"),
    ("endsnotwith", WithParam, "the field '{field}' must not end with '{param}'"),
    ("endswith", WithParam, "the field '{field}' must end with '{param}'"),
    ("excludes", WithParam, "the field '{field}' must not contain the text '{param}'"),
    (
        "excludesall",
        WithParam,
        "the field '{field}' must not contain any of the characters '{param}'",
    ),
    ("excludesrune", WithParam, "the field '{field}' must not contain the character '{param}'"),
    ("lowercase", Subject, "the field '{field}' must be in lowercase"),
    ("multibyte", Subject, "the field '{field}' must contain multi-byte characters"),
    ("number", Subject, "the field '{field}' must be a valid number"),
    ("numeric", Subject, "the field '{field}' must be a valid numeric value"),
    ("printascii", Subject, "the field '{field}' must contain only printable ASCII characters"),
    ("startsnotwith", WithParam, "the field '{field}' must not start with '{param}'"),
    ("startswith", WithParam, "the field '{field}' must start with '{param}'"),
    ("uppercase", Subject, "the field '{field}' must be in uppercase"),

    // Formats and identifiers
    ("base64", Subject, "the field '{field}' must be a valid Base64 string"),
    ("base64url", Subject, "the field '{field}' must be a valid Base64URL string"),
    ("base64rawurl", Subject, "the field '{field}' must be a valid Base64RawURL string"),
    ("bic", Subject, "the field '{field}' must be a valid Business Identifier Code (BIC)"),
    ("bcp47_language_tag", Subject, "the field '{field}' must be a valid BCP 47 language tag"),
    ("btc_addr", Subject, "the field '{field}' must be a valid Bitcoin address"),
    ("btc_addr_bech32", Subject, "the field '{field}' must be a valid Bitcoin Bech32 address"),
    ("credit_card", Subject, "the field '{field}' must be a valid credit card number"),
    ("mongodb", Subject, "the field '{field}' must be a valid MongoDB ObjectID"),
    (
        "mongodb_connection_string",
        Subject,
        "the field '{field}' must be a valid MongoDB connection string",
    ),
    ("cron", Subject, "the field '{field}' must be a valid cron expression"),
    ("spicedb", Subject, "the field '{field}' must be a valid SpiceDb identifier"),
    ("datetime", WithParam, "the field '{field}' must be a valid datetime format '{param}'"),
    ("e164", Subject, "the field '{field}' must be a valid E.164 formatted phone number"),
    ("ein", Subject, "the field '{field}' must be a valid U.S. Employer Identification Number"),
    ("email", Subject, "the field '{field}' must be a valid email address"),
    ("eth_addr", Subject, "the field '{field}' must be a valid Ethereum address"),
    ("hexadecimal", Subject, "the field '{field}' must be a valid hexadecimal string"),
    ("hexcolor", Subject, "the field '{field}' must be a valid hex color"),
    ("hsl", Subject, "the field '{field}' must be a valid HSL color"),
    ("hsla", Subject, "the field '{field}' must be a valid HSLA color"),
    ("html", Subject, "the field '{field}' must contain valid HTML tags"),
    ("html_encoded", Subject, "the field '{field}' must be HTML encoded"),
    ("isbn", Subject, "the field '{field}' must be a valid ISBN"),
    ("isbn10", Subject, "the field '{field}' must be a valid ISBN-10"),
    ("isbn13", Subject, "the field '{field}' must be a valid ISBN-13"),
    ("issn", Subject, "the field '{field}' must be a valid ISSN"),
    (
        "iso3166_1_alpha2",
        Subject,
        "the field '{field}' must be a valid ISO 3166-1 alpha-2 country code",
    ),
    (
        "iso3166_1_alpha3",
        Subject,
        "the field '{field}' must be a valid ISO 3166-1 alpha-3 country code",
    ),
    (
        "iso3166_1_alpha_numeric",
        Subject,
        "the field '{field}' must be a valid ISO 3166-1 numeric country code",
    ),
    (
        "iso3166_2",
        Subject,
        "the field '{field}' must be a valid ISO 3166-2 country subdivision code",
    ),
    ("iso4217", Subject, "the field '{field}' must be a valid ISO 4217 currency code"),
    ("json", Subject, "the field '{field}' must be valid JSON"),
    ("jwt", Subject, "the field '{field}' must be a valid JSON Web Token (JWT)"),
    ("latitude", Subject, "the field '{field}' must be a valid latitude"),
    ("longitude", Subject, "the field '{field}' must be a valid longitude"),
    ("luhn_checksum", Subject, "the field '{field}' must pass the Luhn algorithm checksum"),
    (
        "postcode_iso3166_alpha2",
        WithParam,
        "the field '{field}' must be a valid postcode for the country '{param}'",
    ),
    (
        "postcode_iso3166_alpha2_field",
        WithParam,
        "the field '{field}' must be a valid postcode for the country in field '{param}'",
    ),
    ("rgb", Subject, "the field '{field}' must be a valid RGB color"),
    ("rgba", Subject, "the field '{field}' must be a valid RGBA color"),
    ("ssn", Subject, "the field '{field}' must be a valid Social Security Number"),
    ("timezone", Subject, "the field '{field}' must be a valid timezone"),
    ("uuid", Subject, "the field '{field}' must be a valid UUID"),
    ("uuid3", Subject, "the field '{field}' must be a valid UUID v3"),
    ("uuid3_rfc4122", Subject, "the field '{field}' must be a valid UUID v3 RFC4122"),
    ("uuid4", Subject, "the field '{field}' must be a valid UUID v4"),
    ("uuid4_rfc4122", Subject, "the field '{field}' must be a valid UUID v4 RFC4122"),
    ("uuid5", Subject, "the field '{field}' must be a valid UUID v5"),
    ("uuid5_rfc4122", Subject, "the field '{field}' must be a valid UUID v5 RFC4122"),
    ("uuid_rfc4122", Subject, "the field '{field}' must be a valid UUID RFC4122"),
    ("md4", Subject, "the field '{field}' must be a valid MD4 hash"),
    ("md5", Subject, "the field '{field}' must be a valid MD5 hash"),
    ("sha256", Subject, "the field '{field}' must be a valid SHA256 hash"),
    ("sha384", Subject, "the field '{field}' must be a valid SHA384 hash"),
    ("sha512", Subject, "the field '{field}' must be a valid SHA512 hash"),
    ("ripemd128", Subject, "the field '{field}' must be a valid RIPEMD-128 hash"),
    ("ripemd160", Subject, "the field '{field}' must be a valid RIPEMD-160 hash"),
    ("tiger128", Subject, "the field '{field}' must be a valid TIGER128 hash"),
    ("tiger160", Subject, "the field '{field}' must be a valid TIGER160 hash"),
    ("tiger192", Subject, "the field '{field}' must be a valid TIGER192 hash"),
    ("semver", Subject, "the field '{field}' must be a valid semantic version"),
    ("ulid", Subject, "the field '{field}' must be a valid ULID"),
    ("cve", Subject, "the field '{field}' must be a valid CVE identifier"),

    // Literal comparisons
    ("eq", WithParam, "the field '{field}' must be equal to '{param}'"),
    ("eq_ignore_case", WithParam, "the field '{field}' must be equal to '{param}' ignoring case"),
    ("gt", WithParam, "the field '{field}' must be greater than {param}"),
    ("gte", WithParam, "the field '{field}' must be greater than or equal to {param}"),
    ("lt", WithParam, "the field '{field}' must be less than {param}"),
    ("lte", WithParam, "the field '{field}' must be less than or equal to {param}"),
    ("ne", WithParam, "the field '{field}' must not be equal to '{param}'"),
    (
        "ne_ignore_case",
        WithParam,
        "the field '{field}' must not be equal to '{param}' ignoring case",
    ),

    // Size family (text reads as a length, see `magnitude_for`)
    ("len", Size, LENGTH),
    ("max", Size, LENGTH),
    ("min", Size, LENGTH),

    // Presence, enumerations, conditionals
    ("oneof", WithParam, "the field '{field}' must be one of the following values: {param}"),
    ("required", Subject, "the field '{field}' is required"),
    ("required_if", WithParam, "the field '{field}' is required when {param}"),
    ("required_unless", WithParam, "the field '{field}' is required unless {param}"),
    ("required_with", WithParam, "the field '{field}' is required when {param} is present"),
    (
        "required_with_all",
        WithParam,
        "the field '{field}' is required when all of {param} are present",
    ),
    ("required_without", WithParam, "the field '{field}' is required when {param} is not present"),
    (
        "required_without_all",
        WithParam,
        "the field '{field}' is required when none of {param} are present",
    ),
    ("excluded_if", WithParam, "the field '{field}' is excluded when {param}"),
    ("excluded_unless", WithParam, "the field '{field}' is excluded unless {param}"),
    ("excluded_with", WithParam, "the field '{field}' is excluded when {param} is present"),
    (
        "excluded_with_all",
        WithParam,
        "the field '{field}' is excluded when all of {param} are present",
    ),
    ("excluded_without", WithParam, "the field '{field}' is excluded when {param} is not present"),
    (
        "excluded_without_all",
        WithParam,
        "the field '{field}' is excluded when none of {param} are present",
    ),
    ("unique", Subject, "the field '{field}' must contain unique values"),
    ("validateFn", Subject, "the field '{field}' failed custom validation"),

    // Aliases
    (
        "iscolor",
        Subject,
        "the field '{field}' must be a valid color (hex, rgb, rgba, hsl, or hsla)",
    ),
    (
        "country_code",
        Subject,
        "the field '{field}' must be a valid country code (ISO 3166-1 alpha-2, alpha-3, or numeric)",
    ),];
