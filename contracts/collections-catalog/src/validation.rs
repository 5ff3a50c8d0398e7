use crate::*;

pub(crate) fn validate_display_strings(name: &str, symbol: &str) -> Result<(), CollectionError> {
    if name.len() > MAX_NAME_LEN {
        return Err(CollectionError::InvalidInput(format!(
            "Name exceeds max length of {}",
            MAX_NAME_LEN
        )));
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(CollectionError::InvalidInput(format!(
            "Symbol exceeds max length of {}",
            MAX_SYMBOL_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_uri(uri: &str) -> Result<(), CollectionError> {
    if uri.len() > MAX_URI_LEN {
        return Err(CollectionError::InvalidInput(format!(
            "URI exceeds max length of {}",
            MAX_URI_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_royalty(royalty: &Royalty) -> Result<(), CollectionError> {
    if royalty.bps == 0 || royalty.bps > MAX_ROYALTY_BPS {
        return Err(CollectionError::InvalidInput(format!(
            "Royalty must be 1-{} bps (max 50%)",
            MAX_ROYALTY_BPS
        )));
    }
    Ok(())
}
