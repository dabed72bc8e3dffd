// -*- mode: rust; -*-
//
// This file is part of x61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Key agreement tests for x61-dalek.

use rand::rngs::StdRng;
use rand::SeedableRng;

use x61_dalek::*;

const ALICE_SCALAR: u64 = 0x0123_4567_89ab_cdef;
const BOB_SCALAR: u64 = 0x0fed_cba9_8765_4321;

const ALICE_PUBLIC: u64 = 1516952665327974574;
const BOB_PUBLIC: u64 = 1386297068090713849;
const SHARED: u64 = 1182804549946249511;

fn scalar(n: u64) -> Scalar {
    Scalar::from_u64(n).unwrap()
}

#[test]
fn bare_function_known_answers() {
    assert_eq!(x61(&scalar(ALICE_SCALAR), X61_BASEPOINT_U), ALICE_PUBLIC);
    assert_eq!(x61(&scalar(BOB_SCALAR), X61_BASEPOINT_U), BOB_PUBLIC);
    assert_eq!(x61(&scalar(ALICE_SCALAR), BOB_PUBLIC), SHARED);
    assert_eq!(x61(&scalar(BOB_SCALAR), ALICE_PUBLIC), SHARED);
}

#[test]
fn bare_function_times_five() {
    assert_eq!(x61(&scalar(5), X61_BASEPOINT_U), 520311510848589905);
}

#[test]
fn ephemeral_secrets_agree() {
    let mut rng = StdRng::seed_from_u64(0x61);

    let alice_secret = EphemeralSecret::random_from_rng(&mut rng);
    let alice_public = PublicKey::from(&alice_secret);
    let bob_secret = EphemeralSecret::random_from_rng(&mut rng);
    let bob_public = PublicKey::from(&bob_secret);

    assert_ne!(alice_public, bob_public);

    let alice_shared = alice_secret.diffie_hellman(&bob_public);
    let bob_shared = bob_secret.diffie_hellman(&alice_public);

    assert_eq!(alice_shared.to_u64(), bob_shared.to_u64());
    assert!(alice_shared.was_contributory());
}

#[test]
fn public_key_round_trips_through_u64() {
    let public = PublicKey::from(BOB_PUBLIC);
    assert_eq!(public.to_u64(), BOB_PUBLIC);
    // Values at or above the modulus are reduced.
    assert_eq!(PublicKey::from((1u64 << 61) - 1 + 9).to_u64(), 9);
}

#[test]
fn zero_public_key_is_not_contributory() {
    let mut rng = StdRng::seed_from_u64(0x0);
    let secret = EphemeralSecret::random_from_rng(&mut rng);
    let shared = secret.diffie_hellman(&PublicKey::from(0u64));
    assert_eq!(shared.to_u64(), 0);
    assert!(!shared.was_contributory());
}

#[test]
#[cfg(feature = "static_secrets")]
fn static_secrets_known_answers() {
    let alice = StaticSecret::from(scalar(ALICE_SCALAR));
    let bob = StaticSecret::from(scalar(BOB_SCALAR));

    assert_eq!(PublicKey::from(&alice).to_u64(), ALICE_PUBLIC);
    assert_eq!(PublicKey::from(&bob).to_u64(), BOB_PUBLIC);

    let shared = alice.diffie_hellman(&PublicKey::from(&bob));
    assert_eq!(shared.to_u64(), SHARED);
    // The secret is still usable.
    let again = alice.diffie_hellman(&PublicKey::from(BOB_PUBLIC));
    assert_eq!(again.to_u64(), SHARED);

    assert_eq!(alice.to_scalar(), scalar(ALICE_SCALAR));
}

#[test]
#[cfg(feature = "reusable_secrets")]
fn reusable_secrets_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let alice = ReusableSecret::random_from_rng(&mut rng);
    let bob = ReusableSecret::random_from_rng(&mut rng);
    let carol = ReusableSecret::random_from_rng(&mut rng);

    let ab = alice.diffie_hellman(&PublicKey::from(&bob));
    let ba = bob.diffie_hellman(&PublicKey::from(&alice));
    let ac = alice.diffie_hellman(&PublicKey::from(&carol));
    let ca = carol.diffie_hellman(&PublicKey::from(&alice));

    assert_eq!(ab.to_u64(), ba.to_u64());
    assert_eq!(ac.to_u64(), ca.to_u64());
    assert_ne!(ab.to_u64(), ac.to_u64());
}

#[test]
#[cfg(feature = "os_rng")]
fn os_rng_secrets_agree() {
    let alice = EphemeralSecret::random();
    let bob = EphemeralSecret::random();
    let alice_public = PublicKey::from(&alice);
    let bob_public = PublicKey::from(&bob);
    assert_eq!(
        alice.diffie_hellman(&bob_public).to_u64(),
        bob.diffie_hellman(&alice_public).to_u64()
    );
}
