//! PKCS#1, PKCS#8 and X.509 decoding support.
//!
//! Note: PKCS#1 support is achieved through a blanket impl of the
//! `pkcs1` crate's traits for types which impl the `pkcs8` crate's traits.

use crate::{RsaPrivateKey, RsaPublicKey};
use num_bigint::BigUint;

#[cfg(feature = "x509")]
use crate::errors::Result;
#[cfg(feature = "x509")]
use pkcs8::{
    der::{Decode, Encode},
    DecodePublicKey,
};

/// Verify that the `AlgorithmIdentifier` for a key is correct.
fn verify_algorithm_id(algorithm: &pkcs8::AlgorithmIdentifierRef<'_>) -> spki::Result<()> {
    algorithm.assert_algorithm_oid(pkcs1::ALGORITHM_OID)?;

    if algorithm.parameters_any()? != pkcs8::der::asn1::Null.into() {
        return Err(spki::Error::KeyMalformed);
    }

    Ok(())
}

impl TryFrom<pkcs8::PrivateKeyInfo<'_>> for RsaPrivateKey {
    type Error = pkcs8::Error;

    fn try_from(private_key_info: pkcs8::PrivateKeyInfo<'_>) -> pkcs8::Result<Self> {
        verify_algorithm_id(&private_key_info.algorithm)?;

        let pkcs1_key = pkcs1::RsaPrivateKey::try_from(private_key_info.private_key)?;

        // Multi-prime RSA keys not currently supported
        if pkcs1_key.version() != pkcs1::Version::TwoPrime {
            return Err(pkcs1::Error::Version.into());
        }

        let n = BigUint::from_bytes_be(pkcs1_key.modulus.as_bytes());
        let e = BigUint::from_bytes_be(pkcs1_key.public_exponent.as_bytes());
        let d = BigUint::from_bytes_be(pkcs1_key.private_exponent.as_bytes());

        RsaPrivateKey::from_components(n, e, d).map_err(|_| pkcs8::Error::KeyMalformed)
    }
}

impl TryFrom<pkcs8::SubjectPublicKeyInfoRef<'_>> for RsaPublicKey {
    type Error = spki::Error;

    fn try_from(public_key_info: pkcs8::SubjectPublicKeyInfoRef<'_>) -> spki::Result<Self> {
        verify_algorithm_id(&public_key_info.algorithm)?;

        let pkcs1_key = pkcs1::RsaPublicKey::try_from(
            public_key_info
                .subject_public_key
                .as_bytes()
                .ok_or(spki::Error::KeyMalformed)?,
        )?;
        let n = BigUint::from_bytes_be(pkcs1_key.modulus.as_bytes());
        let e = BigUint::from_bytes_be(pkcs1_key.public_exponent.as_bytes());

        RsaPublicKey::new(n, e).map_err(|_| spki::Error::KeyMalformed)
    }
}

#[cfg(feature = "x509")]
impl RsaPublicKey {
    /// Extract the subject public key from a DER encoded X.509 certificate.
    ///
    /// Only the key is used: the certificate's signature and validity period
    /// are not checked.
    pub fn from_certificate_der(der: &[u8]) -> Result<Self> {
        let cert = x509_cert::Certificate::from_der(der)?;
        let spki_der = cert.tbs_certificate.subject_public_key_info.to_der()?;

        Ok(Self::from_public_key_der(&spki_der).map_err(pkcs8::Error::from)?)
    }

    /// Extract the subject public key from a PEM encoded X.509 certificate
    /// (`-----BEGIN CERTIFICATE-----`).
    ///
    /// Only the key is used: the certificate's signature and validity period
    /// are not checked.
    #[cfg(feature = "pem")]
    pub fn from_certificate_pem(pem: &str) -> Result<Self> {
        use pkcs8::der::DecodePem;

        let cert = x509_cert::Certificate::from_pem(pem)?;
        let spki_der = cert.tbs_certificate.subject_public_key_info.to_der()?;

        Ok(Self::from_public_key_der(&spki_der).map_err(pkcs8::Error::from)?)
    }
}
