// 2^(j/64) for j in 0..64, stored as (tail, hi) pairs: 2^(j/64) = hi * (1 + tail).
// hi always carries the biased exponent of 1.0 so 2^n can be added to its
// exponent field.

pub(super) const EXP_TABLE_BITS: u32 = 6;

pub(super) const EXP_TAB_U64: [u64; 128] = [
    0x0000000000000000u64,
    0x3ff0000000000000u64,
    0x3cad7bbf0e03754du64,
    0x3ff02c9a3e778060u64,
    0x3c8cd2523567f613u64,
    0x3ff059b0d3158574u64,
    0x3c60f74e61e6c861u64,
    0x3ff0874518759bc8u64,
    0x3c979aa65d837b6cu64,
    0x3ff0b5586cf9890fu64,
    0x3c3ebe3d702f9cd1u64,
    0x3ff0e3ec32d3d1a2u64,
    0x3ca3516e1e63bcd8u64,
    0x3ff11301d0125b50u64,
    0x3ca4c55426f0387bu64,
    0x3ff1429aaea92ddfu64,
    0x3ca9515362523fb6u64,
    0x3ff172b83c7d517au64,
    0x3c8b898c3f1353bfu64,
    0x3ff1a35beb6fcb75u64,
    0x3c9aecf73e3a2f5fu64,
    0x3ff1d4873168b9aau64,
    0x3c8a6f4144a6c38du64,
    0x3ff2063b88628cd6u64,
    0x3c968efde3a8a894u64,
    0x3ff2387a6e756238u64,
    0x3c80472b981fe7f2u64,
    0x3ff26b4565e27cddu64,
    0x3c82f7e16d09ab31u64,
    0x3ff29e9df51fdee1u64,
    0x3c8b3782720c0ab3u64,
    0x3ff2d285a6e4030bu64,
    0x3c834d754db0abb6u64,
    0x3ff306fe0a31b715u64,
    0x3c8fdd395dd3f84au64,
    0x3ff33c08b26416ffu64,
    0x3ca12f8ccc187d29u64,
    0x3ff371a7373aa9cau64,
    0x3ca7d229738b5e8bu64,
    0x3ff3a7db34e59ff6u64,
    0x3c859f48a72a4c6du64,
    0x3ff3dea64c123422u64,
    0x3ca8b846259d9205u64,
    0x3ff4160a21f72e29u64,
    0x3c4363ed60c2ac12u64,
    0x3ff44e086061892du64,
    0x3c6ecce1daa10379u64,
    0x3ff486a2b5c13cd0u64,
    0x3c7690cebb7aafb0u64,
    0x3ff4bfdad5362a27u64,
    0x3ca083cc9b282a09u64,
    0x3ff4f9b2769d2ca6u64,
    0x3ca509b0c1aae707u64,
    0x3ff5342b569d4f81u64,
    0x3c93350518fdd78eu64,
    0x3ff56f4736b527dau64,
    0x3c9063e1e21c5409u64,
    0x3ff5ab07dd485429u64,
    0x3c9432e62b64c035u64,
    0x3ff5e76f15ad2148u64,
    0x3ca0128499f08c0au64,
    0x3ff6247eb03a5584u64,
    0x3c99f0870073dc06u64,
    0x3ff6623882552224u64,
    0x3c998d4d0da05571u64,
    0x3ff6a09e667f3bccu64,
    0x3ca52bb986ce4786u64,
    0x3ff6dfb23c651a2eu64,
    0x3ca32092206f0dabu64,
    0x3ff71f75e8ec5f73u64,
    0x3ca061228e17a7a6u64,
    0x3ff75feb564267c8u64,
    0x3ca244ac461e9f86u64,
    0x3ff7a11473eb0186u64,
    0x3c65ebe1abd66c55u64,
    0x3ff7e2f336cf4e62u64,
    0x3c96fe9fbbff67d0u64,
    0x3ff82589994cce12u64,
    0x3c951f1414c801dfu64,
    0x3ff868d99b4492ecu64,
    0x3c8db72fc1f0eab4u64,
    0x3ff8ace5422aa0dbu64,
    0x3c7bf68359f35f44u64,
    0x3ff8f1ae99157736u64,
    0x3ca360ba9c06283cu64,
    0x3ff93737b0cdc5e4u64,
    0x3c95e8d120f962aau64,
    0x3ff97d829fde4e4fu64,
    0x3c71affc2b91ce27u64,
    0x3ff9c49182a3f090u64,
    0x3c9b6d34589a2ebdu64,
    0x3ffa0c667b5de564u64,
    0x3c95277c9ab89880u64,
    0x3ffa5503b23e255cu64,
    0x3c8469846e735ab3u64,
    0x3ffa9e6b5579fdbfu64,
    0x3c8c1a7792cb3387u64,
    0x3ffae89f995ad3adu64,
    0x3ca22466dc2d1d96u64,
    0x3ffb33a2b84f15fau64,
    0x3ca1112eb19505aeu64,
    0x3ffb7f76f2fb5e46u64,
    0x3c74ffd70a5fddcdu64,
    0x3ffbcc1e904bc1d2u64,
    0x3c736eae30af0cb3u64,
    0x3ffc199bdd85529cu64,
    0x3c84e08fd10959acu64,
    0x3ffc67f12e57d14bu64,
    0x3c676b2c6c921968u64,
    0x3ffcb720dcef9069u64,
    0x3c93700936df99b3u64,
    0x3ffd072d4a07897bu64,
    0x3c74a385a63d07a7u64,
    0x3ffd5818dcfba487u64,
    0x3c8e5a50d5c192acu64,
    0x3ffda9e603db3285u64,
    0x3c98bb731c4a9792u64,
    0x3ffdfc97337b9b5eu64,
    0x3c74b604603a88d3u64,
    0x3ffe502ee78b3ff6u64,
    0x3c916f2792094926u64,
    0x3ffea4afa2a490d9u64,
    0x3c8ec3bc41aa2008u64,
    0x3ffefa1bee615a27u64,
    0x3c8a64a931d185eeu64,
    0x3fff50765b6e4540u64,
    0x3c77893b4d91cd9du64,
    0x3fffa7c1819e90d8u64,
];
