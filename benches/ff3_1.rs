extern crate bencher;

const KEY: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";
const TWEAK: &str = "00000000000000";

fn context(b: &mut bencher::Bencher) {
    b.iter(|| ff3::ff3_1::FF3_1::new(KEY, TWEAK, Some(26), None).unwrap());
}

fn encrypt(b: &mut bencher::Bencher) {
    let ff3_1 = ff3::ff3_1::FF3_1::new(KEY, TWEAK, Some(26), None).unwrap();
    b.iter(|| ff3_1.encrypt("0123456789"));
}

fn decrypt(b: &mut bencher::Bencher) {
    let ff3_1 = ff3::ff3_1::FF3_1::new(KEY, TWEAK, Some(26), None).unwrap();
    let ct = ff3_1.encrypt("0123456789").unwrap();
    b.iter(|| ff3_1.decrypt(&ct));
}

bencher::benchmark_group!(benches, context, encrypt, decrypt);
bencher::benchmark_main!(benches);
