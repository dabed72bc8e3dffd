// -*- mode: rust; -*-
//
// This file is part of x61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! x61 Diffie-Hellman key exchange
//!
//! Keys and shared secrets are affine \\(x\\)-coordinates on the curve61
//! Montgomery curve, carried as integers below \\( 2\^{61} - 1 \\).  Every
//! scalar multiplication is a Montgomery ladder.
//!
//! The group has roughly \\( 2\^{61} \\) elements, so a discrete logarithm
//! costs about \\( 2\^{30} \\) operations.  These keys protect nothing; they
//! exist to exercise the ladder in a complete key agreement.

use curve61_dalek::constants::BASEPOINT;
use curve61_dalek::{FieldElement, ProjectivePoint, Scalar};

use rand_core::CryptoRng;
#[cfg(feature = "os_rng")]
use rand_core::TryRngCore;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Multiply the point with affine \\(x\\)-coordinate `u` by `k` and return
/// the affine \\(x\\)-coordinate of the result.
///
/// The identity has \\( Z = 0 \\) and comes out as \\( x = 0 \\), the same
/// value as the point of order two.
fn mul_x(k: &Scalar, u: &FieldElement) -> FieldElement {
    let point = &ProjectivePoint::from_affine_x(u) * k;
    &point.X * &point.Z.invert()
}

/// A Diffie-Hellman public key: the affine \\(x\\)-coordinate of
/// \\( \[k\]P \\) for the owner's secret \\(k\\).
///
/// Public keys are not wiped on drop; `Zeroize` is available for callers
/// who want to clear one.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct PublicKey(pub(crate) FieldElement);

impl From<u64> for PublicKey {
    /// Given an \\(x\\)-coordinate, construct an x61 `PublicKey`.
    ///
    /// The value is reduced modulo \\( 2\^{61} - 1 \\).
    fn from(u: u64) -> PublicKey {
        PublicKey(FieldElement::from_u64(u))
    }
}

impl PublicKey {
    /// The canonical \\(x\\)-coordinate of this public key.
    #[inline]
    pub fn to_u64(&self) -> u64 {
        self.0.to_u64()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for PublicKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// A secret scalar which computes exactly one [`SharedSecret`].
///
/// [`EphemeralSecret::diffie_hellman`] takes `self` by value, so the scalar
/// is wiped as soon as the exchange is done.  It can only be drawn from an
/// RNG; there is no way to load or export it.
pub struct EphemeralSecret(pub(crate) Scalar);

impl EphemeralSecret {
    /// Multiply `their_public` by this secret, consuming it.
    pub fn diffie_hellman(self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(mul_x(&self.0, &their_public.0))
    }

    /// Generate a new [`EphemeralSecret`] with the supplied RNG.
    pub fn random_from_rng<R: CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        EphemeralSecret(Scalar::random(csprng))
    }

    /// Generate a new [`EphemeralSecret`].
    #[cfg(feature = "os_rng")]
    pub fn random() -> Self {
        Self::random_from_rng(&mut rand_core::OsRng.unwrap_err())
    }
}

impl<'a> From<&'a EphemeralSecret> for PublicKey {
    /// Compute the public key \\( x(\[k\]P) \\) of an [`EphemeralSecret`].
    fn from(secret: &'a EphemeralSecret) -> PublicKey {
        PublicKey(mul_x(&secret.0, &BASEPOINT.x))
    }
}

impl Drop for EphemeralSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for EphemeralSecret {}

/// A secret scalar usable for several exchanges within one session.
///
/// Like [`EphemeralSecret`] it is drawn from an RNG and cannot be exported,
/// but `diffie_hellman` borrows it.  Prefer [`EphemeralSecret`] unless a
/// single key really must meet several peers.
#[cfg(feature = "reusable_secrets")]
#[derive(Clone)]
pub struct ReusableSecret(pub(crate) Scalar);

#[cfg(feature = "reusable_secrets")]
impl ReusableSecret {
    /// Perform a Diffie-Hellman key agreement between `self` and
    /// `their_public` key to produce a [`SharedSecret`].
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(mul_x(&self.0, &their_public.0))
    }

    /// Generate a new [`ReusableSecret`] with the supplied RNG.
    pub fn random_from_rng<R: CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        ReusableSecret(Scalar::random(csprng))
    }

    /// Generate a new [`ReusableSecret`].
    #[cfg(feature = "os_rng")]
    pub fn random() -> Self {
        Self::random_from_rng(&mut rand_core::OsRng.unwrap_err())
    }
}

#[cfg(feature = "reusable_secrets")]
impl<'a> From<&'a ReusableSecret> for PublicKey {
    /// Compute the public key of a [`ReusableSecret`].
    fn from(secret: &'a ReusableSecret) -> PublicKey {
        PublicKey(mul_x(&secret.0, &BASEPOINT.x))
    }
}

#[cfg(feature = "reusable_secrets")]
impl Drop for ReusableSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(all(feature = "reusable_secrets", feature = "zeroize"))]
impl ZeroizeOnDrop for ReusableSecret {}

/// A long-lived secret scalar.
///
/// It converts to and from a [`Scalar`], which makes fixed known-answer
/// keys possible.  A stored 61-bit scalar is recoverable from its public
/// key with modest effort, so this is a testing convenience and not a
/// storage format.
#[cfg(feature = "static_secrets")]
#[derive(Clone)]
pub struct StaticSecret(Scalar);

#[cfg(feature = "static_secrets")]
impl StaticSecret {
    /// Perform a Diffie-Hellman key agreement between `self` and
    /// `their_public` key to produce a `SharedSecret`.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(mul_x(&self.0, &their_public.0))
    }

    /// Generate a new [`StaticSecret`] with the supplied RNG.
    pub fn random_from_rng<R: CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        StaticSecret(Scalar::random(csprng))
    }

    /// Generate a new [`StaticSecret`].
    #[cfg(feature = "os_rng")]
    pub fn random() -> Self {
        Self::random_from_rng(&mut rand_core::OsRng.unwrap_err())
    }

    /// A copy of this key's scalar.
    #[inline]
    pub fn to_scalar(&self) -> Scalar {
        self.0
    }

    /// View this key's scalar.
    #[inline]
    pub fn as_scalar(&self) -> &Scalar {
        &self.0
    }
}

#[cfg(feature = "static_secrets")]
impl From<Scalar> for StaticSecret {
    /// Use `scalar` as a long-lived secret.
    fn from(scalar: Scalar) -> StaticSecret {
        StaticSecret(scalar)
    }
}

#[cfg(feature = "static_secrets")]
impl<'a> From<&'a StaticSecret> for PublicKey {
    /// Compute the public key of a [`StaticSecret`].
    fn from(secret: &'a StaticSecret) -> PublicKey {
        PublicKey(mul_x(&secret.0, &BASEPOINT.x))
    }
}

#[cfg(feature = "static_secrets")]
impl Drop for StaticSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(all(feature = "static_secrets", feature = "zeroize"))]
impl ZeroizeOnDrop for StaticSecret {}

/// The affine \\(x\\)-coordinate of \\( \[ab\]P \\), shared by both parties.
///
/// Wiped on drop.
pub struct SharedSecret(pub(crate) FieldElement);

impl SharedSecret {
    /// The canonical \\(x\\)-coordinate of this shared secret.
    #[inline]
    pub fn to_u64(&self) -> u64 {
        self.0.to_u64()
    }

    /// Check in constant time whether our secret influenced this value.
    ///
    /// A peer which sends the \\(x\\)-coordinate \\(0\\), or any point of small
    /// order, drives the ladder to the identity or to the point of order
    /// two.  Both come out as \\(0\\) whatever our scalar was.
    ///
    /// Returns `false` exactly when the shared value is \\(0\\).
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        !bool::from(self.0.is_zero())
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SharedSecret {}

/// Compute the affine \\(x\\)-coordinate of \\( \[k\]Q \\), where \\(Q\\) has
/// \\(x\\)-coordinate `u`.
///
/// `u` is reduced modulo \\( 2\^{61} - 1 \\).  With `u =`
/// [`X61_BASEPOINT_U`] this computes a public key.
///
/// # Example
///
/// ```
/// use x61_dalek::{x61, Scalar, X61_BASEPOINT_U};
///
/// let a = Scalar::from_u64(0x0123_4567_89ab_cdef)?;
/// let b = Scalar::from_u64(0x0fed_cba9_8765_4321)?;
///
/// let a_public = x61(&a, X61_BASEPOINT_U);
/// let b_public = x61(&b, X61_BASEPOINT_U);
/// assert_eq!(a_public, 1516952665327974574);
///
/// // Either side reaches x([ab]P).
/// assert_eq!(x61(&a, b_public), 1182804549946249511);
/// assert_eq!(x61(&b, a_public), 1182804549946249511);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn x61(k: &Scalar, u: u64) -> u64 {
    mul_x(k, &FieldElement::from_u64(u)).to_u64()
}

/// The \\(x\\)-coordinate of the curve61 base point.
pub const X61_BASEPOINT_U: u64 = 9;
