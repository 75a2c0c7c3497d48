use rand::SeedableRng;
use rand::rngs::StdRng;
use stark_curve::{CurveParams, Felt, hash_chain};
use stark_ecdsa::{Signature, SigningKey, VerifyingKey};

fn main() {
    let params = CurveParams::default();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key(&params).expect("derive vk");

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg: Vec<Felt> = b"hello stark"
        .iter()
        .map(|&b| Felt::from_u64(b as u64))
        .collect();
    let hash = hash_chain(&params, &msg).expect("hash");

    let sig = sk.sign(&params, &mut rng, &hash).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(vk2.verify(&params, &hash, &sig2));
    assert_eq!(sk2.verifying_key(&params).expect("derive vk"), vk);

    println!("hash: {hash}");
    println!("r:    {}", sig2.r());
    println!("s:    {}", sig2.s());
}
