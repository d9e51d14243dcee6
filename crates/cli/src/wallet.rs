use std::path::PathBuf;

use eyre::OptionExt;
use fusion_sdk::solana_utils::{
    signer::{local_signer, LocalSignerRef},
    solana_sdk::signature::read_keypair_file,
};
use url::Url;

/// Parse url or path.
fn parse_url_or_path(source: &str) -> eyre::Result<Url> {
    let url = match Url::parse(source) {
        Ok(url) => url,
        Err(_) => {
            let path = shellexpand::tilde(source);
            let path: PathBuf = path.parse()?;
            let path = std::fs::canonicalize(path)?;
            Url::from_file_path(&path)
                .ok()
                .ok_or_eyre("invalid wallet path")?
        }
    };

    Ok(url)
}

/// Load signer from url.
///
/// Only keypair files are supported.
pub fn signer_from_source(source: &str) -> eyre::Result<LocalSignerRef> {
    let url = parse_url_or_path(source)?;

    match url.scheme() {
        "file" => {
            let keypair = read_keypair_file(url.path()).map_err(|err| eyre::eyre!("{err}"))?;
            Ok(local_signer(keypair))
        }
        scheme => Err(eyre::eyre!("unsupported scheme: {scheme}")),
    }
}

#[cfg(test)]
mod tests {
    use fusion_sdk::solana_utils::solana_sdk::signature::{write_keypair_file, Keypair, Signer};

    use super::*;

    #[test]
    fn load_keypair_file() -> eyre::Result<()> {
        let dir = std::env::temp_dir().join(format!("fusion-wallet-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("id.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).map_err(|err| eyre::eyre!("{err}"))?;

        let signer = signer_from_source(path.to_str().ok_or_eyre("non utf-8 path")?)?;
        assert_eq!(signer.pubkey(), keypair.pubkey());

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn unsupported_scheme() {
        assert!(signer_from_source("usb://ledger").is_err());
    }
}
