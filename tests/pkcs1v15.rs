//! Private-key encryption and public-key decryption against PEM fixtures.

#![cfg(all(feature = "pem", feature = "x509"))]

use hex_literal::hex;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa_reverse::{
    pkcs1::DecodeRsaPrivateKey,
    pkcs1v15::{self, DecryptingKey, EncryptingKey},
    pkcs8::{DecodePrivateKey, DecodePublicKey},
    traits::{DecryptingKeypair, Decryptor, Encryptor, PublicKeyParts},
    Error, RsaPrivateKey, RsaPublicKey,
};

const PRIVATE_KEY_PEM: &str = include_str!("examples/rsa2048-priv.pem");
const CERTIFICATE_PEM: &str = include_str!("examples/rsa2048-cert.pem");

const ABC_CIPHERTEXT: [u8; 256] = hex!(
    "a2c7060849d1cba15a85645d1b21fdb8373b5fe2022a5cec3ce64341fa5067b1"
    "06e5d31ea834d382e6cc90507fafb4a8d8275106fa7c679bd7925a5810cc2a11"
    "531271f4da66f7f8cad64d6b43cd0399bad99bebd4b1c2e2b92d37f9e9b1f372"
    "cb9d69452387477a8d59c0167a96955a92912511e308675b6834a1f899e9f7b9"
    "625e4949f0056bfac448ff0c1797f7be0bc8f4c2011b81bca60c8bbfab829d0f"
    "b8afc874faf669619797e64fba103df74034ccc042cf50f016a514cb1ad0cda0"
    "9a76e72dad72dd903c56832b65132863e1b275146f29f83a06f0c38e1e4768b9"
    "f3c615bd49775909746ab0c49e861992969255f0c6d01f10604f6041c5a0e19f"
);

const JSON_DOCUMENT: &str = r#"{
				"id": 122,
				"name": "《阿斯顿风格》",
				"bool": true,
				"hosts": ["*.api7.com"],
				"time": 12134984799,
				"label": {
					"group": "test"
				}
			}"#;

const MIXED_TEXT: &str =
    "abcdefghijklnmopqrstuvwxyz!@#$%^&*()_+=-0987654321 ,.……￥，。、`~/|中文{}【】《》，。、；「";

fn private_key() -> RsaPrivateKey {
    RsaPrivateKey::from_pkcs1_pem(PRIVATE_KEY_PEM).unwrap()
}

fn public_key() -> RsaPublicKey {
    RsaPublicKey::from_certificate_pem(CERTIFICATE_PEM).unwrap()
}

#[test]
fn certificate_matches_private_key() {
    let private_key = private_key();
    let public_key = public_key();

    assert_eq!(public_key, private_key.to_public_key());
    assert_eq!(public_key.size(), 256);
    assert_eq!(pkcs1v15::max_chunk_len(&public_key), Ok(245));
}

#[test]
fn encrypt_abc_known_answer() {
    let ciphertext = pkcs1v15::private_encrypt(&private_key(), b"abc").unwrap();
    assert_eq!(ciphertext.len(), 256);
    assert_eq!(ciphertext, ABC_CIPHERTEXT);

    let plaintext = pkcs1v15::public_decrypt(&public_key(), &ciphertext).unwrap();
    assert_eq!(plaintext, b"abc");
}

#[test]
fn json_document_fits_one_block() {
    let json = concat!(
        r#"{"id":122,"name":"reverse","bool":true,"hosts":["*.api7.com","*.example.org"],"#,
        r#""time":12134984799,"label":{"group":"test","tier":"gold"},"#,
        r#""note":"payload sized to exactly two hundred bytes, one block."}"#
    );
    assert_eq!(json.len(), 200);

    let ciphertext = private_key().encrypt(json.as_bytes()).unwrap();
    assert_eq!(ciphertext.len(), 256);
    assert_eq!(public_key().decrypt(&ciphertext).unwrap(), json.as_bytes());
}

#[test]
fn roundtrip_lengths() {
    let private_key = private_key();
    let public_key = public_key();

    for len in [0usize, 1, 244, 245, 246, 490, 491, 1000, 4096] {
        let msg: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let ciphertext = private_key.encrypt(&msg).unwrap();

        assert_eq!(ciphertext.len(), len.max(1).div_ceil(245) * 256);
        assert_eq!(
            ciphertext.len(),
            pkcs1v15::ciphertext_len(&public_key, len).unwrap()
        );
        assert_eq!(public_key.decrypt(&ciphertext).unwrap(), msg);
    }
}

#[test]
fn roundtrip_byte_patterns() {
    let private_key = private_key();
    let public_key = public_key();

    let patterns: [&[u8]; 9] = [
        &[],
        &[0xff, 0xff, 0xff, 0x00, 0x00],
        &[0x00, 0x00, 0x00, 0x00, 0x00],
        &[0xff, 0xff, 0xff, 0xff, 0xff],
        &[0xff],
        &[0x00],
        &[0x00; 600],
        &[0xff; 600],
        &[0x00, 0x01, 0xff, 0x00, 0x01, 0x00],
    ];

    for msg in patterns {
        let ciphertext = private_key.encrypt(msg).unwrap();
        assert_eq!(public_key.decrypt(&ciphertext).unwrap(), msg);
    }
}

#[test]
fn roundtrip_strings() {
    let private_key = private_key();
    let public_key = public_key();

    for text in [MIXED_TEXT, JSON_DOCUMENT] {
        let ciphertext = private_key.encrypt(text.as_bytes()).unwrap();
        let plaintext = public_key.decrypt(&ciphertext).unwrap();
        assert_eq!(String::from_utf8(plaintext).unwrap(), text);
    }
}

#[test]
fn equal_messages_give_equal_ciphertext() {
    let private_key = private_key();
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    let msg = MIXED_TEXT.repeat(4);
    let plain = private_key.encrypt(msg.as_bytes()).unwrap();
    let blinded = private_key.encrypt_with_rng(&mut rng, msg.as_bytes()).unwrap();

    assert_eq!(plain, blinded);
    assert_eq!(plain, private_key.encrypt(msg.as_bytes()).unwrap());
}

#[test]
fn rejects_malformed_length() {
    let public_key = public_key();

    for len in [0usize, 1, 255, 257, 511] {
        assert_eq!(
            public_key.decrypt(&vec![0x42; len]),
            Err(Error::MalformedCiphertextLength {
                len,
                block_len: 256
            })
        );
    }
}

#[test]
fn detects_tampered_block() {
    let public_key = public_key();

    for mask in [0x01, 0x80, 0xff] {
        let mut ciphertext = ABC_CIPHERTEXT;
        ciphertext[0] ^= mask;
        assert_eq!(
            public_key.decrypt(&ciphertext),
            Err(Error::MalformedPadding { block: 0 })
        );
    }

    let mut ciphertext = private_key().encrypt(&[0x5a; 500]).unwrap();
    assert_eq!(ciphertext.len(), 3 * 256);
    ciphertext[256..512].copy_from_slice(&ABC_CIPHERTEXT);
    ciphertext[256] ^= 0x01;
    assert_eq!(
        public_key.decrypt(&ciphertext),
        Err(Error::MalformedPadding { block: 1 })
    );
}

#[test]
fn concurrent_use_of_one_key() {
    let encrypting_key = EncryptingKey::new(private_key());
    let decrypting_key = DecryptingKey::new(public_key());

    std::thread::scope(|s| {
        for t in 0u8..4 {
            let encrypting_key = &encrypting_key;
            let decrypting_key = &decrypting_key;
            s.spawn(move || {
                let msg = vec![t; 300 + usize::from(t)];
                let ciphertext = encrypting_key.encrypt(&msg).unwrap();
                assert_eq!(ciphertext.len(), 512);
                assert_eq!(decrypting_key.decrypt(&ciphertext).unwrap(), msg);
            });
        }
    });
}

#[cfg(feature = "base64")]
#[test]
fn base64_roundtrip() {
    let encrypting_key = EncryptingKey::from(private_key());
    let decrypting_key = encrypting_key.decrypting_key();

    let text = encrypting_key.encrypt_to_base64(JSON_DOCUMENT.as_bytes()).unwrap();
    assert!(!text.contains(['+', '/', '=']));
    assert_eq!(
        decrypting_key.decrypt_base64(&text).unwrap(),
        JSON_DOCUMENT.as_bytes()
    );

    assert!(matches!(
        decrypting_key.decrypt_base64("not base64!"),
        Err(Error::Base64(_))
    ));
}

#[test]
fn pkcs8_and_spki_keys() {
    let private_key =
        RsaPrivateKey::from_pkcs8_pem(include_str!("examples/rsa1024-priv-pkcs8.pem")).unwrap();
    let traditional =
        RsaPrivateKey::from_pkcs1_pem(include_str!("examples/rsa1024-priv.pem")).unwrap();
    let public_key =
        RsaPublicKey::from_public_key_pem(include_str!("examples/rsa1024-pub.pem")).unwrap();

    assert_eq!(private_key, traditional);
    assert_eq!(public_key, private_key.to_public_key());
    assert_eq!(pkcs1v15::max_chunk_len(&public_key), Ok(117));

    let ciphertext = private_key.encrypt(MIXED_TEXT.as_bytes()).unwrap();
    assert_eq!(ciphertext.len(), 128);
    assert_eq!(
        public_key.decrypt(&ciphertext).unwrap(),
        MIXED_TEXT.as_bytes()
    );
}

#[test]
fn wrong_key_fails() {
    let other =
        RsaPublicKey::from_public_key_pem(include_str!("examples/rsa1024-pub.pem")).unwrap();
    let ciphertext = private_key().encrypt(b"abc").unwrap();

    assert_eq!(
        other.decrypt(&ciphertext),
        Err(Error::MalformedPadding { block: 0 })
    );
}
