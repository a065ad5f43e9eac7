use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::{Signer, SignerError};
use solana_sdk::transaction::{Transaction, VersionedTransaction};

/// A transaction the wallet can stamp, sign and hand to a connection.
///
/// The adapter never looks inside the message: it only needs the blockhash,
/// a way to attach signatures and the wire form used for sending.
pub trait SignableTransaction: Send + Sync + 'static {
    fn recent_blockhash(&self) -> Hash;

    /// Replace the blockhash. Existing signatures are cleared when it changes.
    fn set_recent_blockhash(&mut self, blockhash: Hash);

    /// Sign with every keypair, keeping signatures already present for others.
    /// Fails if a keypair is not a required signer of the message.
    fn sign_with(&mut self, signers: &[&Keypair]) -> Result<(), SignerError>;

    /// Signature attached for `pubkey`, if it is a required signer and has signed
    fn signature_of(&self, pubkey: &Pubkey) -> Option<Signature>;

    /// Serialized message, the bytes every signature covers
    fn message_data(&self) -> Vec<u8>;

    fn to_versioned(&self) -> VersionedTransaction;

    /// Check if no blockhash has been stamped yet
    fn needs_blockhash(&self) -> bool {
        self.recent_blockhash() == Hash::default()
    }
}

fn find_signature(
    signer_keys: &[Pubkey],
    signatures: &[Signature],
    pubkey: &Pubkey,
) -> Option<Signature> {
    let position = signer_keys.iter().position(|key| key == pubkey)?;
    signatures
        .get(position)
        .copied()
        .filter(|signature| *signature != Signature::default())
}

impl SignableTransaction for Transaction {
    fn recent_blockhash(&self) -> Hash {
        self.message.recent_blockhash
    }

    fn set_recent_blockhash(&mut self, blockhash: Hash) {
        if self.message.recent_blockhash != blockhash {
            self.message.recent_blockhash = blockhash;
            let required = self.message.header.num_required_signatures as usize;
            self.signatures = vec![Signature::default(); required];
        }
    }

    fn sign_with(&mut self, signers: &[&Keypair]) -> Result<(), SignerError> {
        if signers.is_empty() {
            return Ok(());
        }
        let required = self.message.header.num_required_signatures as usize;
        self.signatures.resize(required, Signature::default());
        let signers: Vec<&Keypair> = signers.to_vec();
        let blockhash = self.message.recent_blockhash;
        self.try_partial_sign(&signers, blockhash)
    }

    fn signature_of(&self, pubkey: &Pubkey) -> Option<Signature> {
        let required = self.message.header.num_required_signatures as usize;
        let keys = &self.message.account_keys;
        find_signature(&keys[..required.min(keys.len())], &self.signatures, pubkey)
    }

    fn message_data(&self) -> Vec<u8> {
        self.message.serialize()
    }

    fn to_versioned(&self) -> VersionedTransaction {
        VersionedTransaction::from(self.clone())
    }
}

impl SignableTransaction for VersionedTransaction {
    fn recent_blockhash(&self) -> Hash {
        *self.message.recent_blockhash()
    }

    fn set_recent_blockhash(&mut self, blockhash: Hash) {
        if *self.message.recent_blockhash() != blockhash {
            self.message.set_recent_blockhash(blockhash);
            let required = self.message.header().num_required_signatures as usize;
            self.signatures = vec![Signature::default(); required];
        }
    }

    fn sign_with(&mut self, signers: &[&Keypair]) -> Result<(), SignerError> {
        let required = self.message.header().num_required_signatures as usize;
        let message_data = self.message.serialize();
        self.signatures.resize(required, Signature::default());

        for signer in signers {
            let pubkey = signer.pubkey();
            let position = self
                .message
                .static_account_keys()
                .iter()
                .take(required)
                .position(|key| *key == pubkey)
                .ok_or(SignerError::KeypairPubkeyMismatch)?;
            self.signatures[position] = signer.try_sign_message(&message_data)?;
        }
        Ok(())
    }

    fn signature_of(&self, pubkey: &Pubkey) -> Option<Signature> {
        let required = self.message.header().num_required_signatures as usize;
        let keys = self.message.static_account_keys();
        find_signature(&keys[..required.min(keys.len())], &self.signatures, pubkey)
    }

    fn message_data(&self) -> Vec<u8> {
        self.message.serialize()
    }

    fn to_versioned(&self) -> VersionedTransaction {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::message::{v0, Message, VersionedMessage};
    use solana_sdk::system_instruction;

    fn transfer_tx(payer: &Pubkey) -> Transaction {
        let ix = system_instruction::transfer(payer, &Pubkey::new_unique(), 1_000);
        Transaction::new_with_payer(&[ix], Some(payer))
    }

    #[test]
    fn legacy_sign_attaches_payer_signature() {
        let payer = Keypair::new();
        let mut tx = transfer_tx(&payer.pubkey());
        tx.set_recent_blockhash(Hash::new_unique());

        tx.sign_with(&[&payer]).unwrap();

        let signature = tx.signature_of(&payer.pubkey()).unwrap();
        assert!(signature.verify(payer.pubkey().as_ref(), &tx.message_data()));
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn legacy_sign_fills_missing_signature_slots() {
        let payer = Keypair::new();
        let ix = system_instruction::transfer(&payer.pubkey(), &Pubkey::new_unique(), 1_000);
        let message =
            Message::new_with_blockhash(&[ix], Some(&payer.pubkey()), &Hash::new_unique());
        let mut tx = Transaction {
            signatures: vec![],
            message,
        };

        tx.sign_with(&[&payer]).unwrap();

        assert_eq!(tx.signatures.len(), 1);
        assert!(tx.signature_of(&payer.pubkey()).is_some());
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn legacy_sign_rejects_foreign_keypair() {
        let payer = Keypair::new();
        let stranger = Keypair::new();
        let mut tx = transfer_tx(&payer.pubkey());

        let err = tx.sign_with(&[&stranger]).unwrap_err();
        assert_eq!(err, SignerError::KeypairPubkeyMismatch);
        assert!(tx.signature_of(&stranger.pubkey()).is_none());
    }

    #[test]
    fn changing_blockhash_clears_signatures() {
        let payer = Keypair::new();
        let mut tx = transfer_tx(&payer.pubkey());
        tx.set_recent_blockhash(Hash::new_unique());
        tx.sign_with(&[&payer]).unwrap();

        tx.set_recent_blockhash(Hash::new_unique());
        assert!(tx.signature_of(&payer.pubkey()).is_none());
    }

    #[test]
    fn unstamped_transaction_needs_blockhash() {
        let payer = Keypair::new();
        let mut tx = transfer_tx(&payer.pubkey());
        assert!(tx.needs_blockhash());
        tx.set_recent_blockhash(Hash::new_unique());
        assert!(!tx.needs_blockhash());
    }

    #[test]
    fn versioned_sign_places_signature_by_key_position() {
        let payer = Keypair::new();
        let ix = system_instruction::transfer(&payer.pubkey(), &Pubkey::new_unique(), 1_000);
        let message = v0::Message::try_compile(&payer.pubkey(), &[ix], &[], Hash::new_unique())
            .unwrap();
        let mut tx = VersionedTransaction {
            signatures: vec![],
            message: VersionedMessage::V0(message),
        };

        tx.sign_with(&[&payer]).unwrap();

        assert_eq!(tx.signatures.len(), 1);
        let signature = tx.signature_of(&payer.pubkey()).unwrap();
        assert!(signature.verify(payer.pubkey().as_ref(), &tx.message_data()));
    }
}
