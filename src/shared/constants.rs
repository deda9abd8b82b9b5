/// Dataset served when the request carries no `type` parameter
pub const DEFAULT_DATASET_KIND: &str = "bts";

// =============================================================================
// ERROR MESSAGES
// =============================================================================

/// Client-facing message for an unrecognised `type` parameter
pub const INVALID_DATASET_MESSAGE: &str = "Tipe data tidak valid.";

/// Prefix of the client-facing message for any store failure
pub const STORE_FAILURE_PREFIX: &str = "Koneksi database gagal: ";

// =============================================================================
// DATE FORMATTING
// =============================================================================

/// Indonesian month names, January first
pub const MONTH_NAMES_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];
