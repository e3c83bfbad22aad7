// -ln(B_i) for B_i = (128 + i) / 256, i in 0..=128, stored as (hi, lo) pairs.
// hi is a multiple of 2^-43 so k * LN2_HI + hi is exact.

pub(super) const LOG_TABLE_BITS: u32 = 7;

pub(super) const LOG_TAB_U64: [u64; 258] = [
    0x3fe62e42fefa3800u64,
    0x3d2ef35793c76730u64,
    0x3fe5ee82aa241800u64,
    0x3d2202380cda46beu64,
    0x3fe5af405c364800u64,
    0x3d2dfa63ac10c9fbu64,
    0x3fe5707a26bb8c00u64,
    0x3d09980bff3303ddu64,
    0x3fe5322e26867800u64,
    0x3d05ccc45d257531u64,
    0x3fe4f45a835a5000u64,
    0xbd2e6c516d93b8fbu64,
    0x3fe4b6fd6f970c00u64,
    0x3cef7115ed4c541cu64,
    0x3fe47a1527e8a400u64,
    0xbd22cb6af94d60aau64,
    0x3fe43d9ff2f92400u64,
    0xbcfd984f481051f7u64,
    0x3fe4019c2125cc00u64,
    0xbd26ce7930f0c74cu64,
    0x3fe3c6080c36c000u64,
    0xbd02b7367cfe13c2u64,
    0x3fe38ae217197800u64,
    0xbd218b7abb5569a4u64,
    0x3fe35028ad9d8c00u64,
    0x3d10b83f9527e6acu64,
    0x3fe315da44340800u64,
    0xbd274e93c5a0ed9cu64,
    0x3fe2dbf557b0e000u64,
    0xbd17a6e507b9dc11u64,
    0x3fe2a2786d0ec000u64,
    0x3d206d2be797882du64,
    0x3fe269621134dc00u64,
    0xbd0b61f105226250u64,
    0x3fe230b0d8bebc00u64,
    0x3d12fc066e48667bu64,
    0x3fe1f8635fc61800u64,
    0xbd2a7242c9fe81d3u64,
    0x3fe1c07849ae6000u64,
    0x3cccacdeed70e667u64,
    0x3fe188ee40f23c00u64,
    0x3d14cc4ef8ab4650u64,
    0x3fe151c3f6f29800u64,
    0xbd2edd97a293ae49u64,
    0x3fe11af823c75c00u64,
    0xbd258647bb9ddcb2u64,
    0x3fe0e4898611cc00u64,
    0x3d1c299807801742u64,
    0x3fe0ae76e2d05400u64,
    0x3d1f486b887e7e27u64,
    0x3fe078bf0533c400u64,
    0x3d26812241edf5fdu64,
    0x3fe04360be760400u64,
    0xbd04c45fe79539e0u64,
    0x3fe00e5ae5b20800u64,
    0xbd053ba3b1727b1cu64,
    0x3fdfb358af7a4800u64,
    0x3d0085fa3c164935u64,
    0x3fdf4aa7ee031800u64,
    0x3d12cde56f014a8bu64,
    0x3fdee2a156b41000u64,
    0x3d2f27f45a470251u64,
    0x3fde7b42c3ddb000u64,
    0xbd2465505372bd08u64,
    0x3fde148a1a272800u64,
    0xbd1326b207322938u64,
    0x3fddae75484c9800u64,
    0xbd1ea42d60dc616au64,
    0x3fdd490246def800u64,
    0x3d235bafe9a767a8u64,
    0x3fdce42f18064800u64,
    0xbd0797c33ec7a6b0u64,
    0x3fdc7ff9c7455800u64,
    0xbd29b6ddc15249aeu64,
    0x3fdc1c60693fa000u64,
    0x3d2cec807fe8e180u64,
    0x3fdbb9611b80e000u64,
    0x3d27d85bf40a666du64,
    0x3fdb56fa04462800u64,
    0x3d1095252d841995u64,
    0x3fdaf5295248d000u64,
    0xbd217cc552774458u64,
    0x3fda93ed3c8ad800u64,
    0x3d1e36f2bea77a5du64,
    0x3fda33440224f800u64,
    0x3d23c6457f9d79f5u64,
    0x3fd9d32bea15f000u64,
    0xbd26279e10d0c0b0u64,
    0x3fd973a343135800u64,
    0xbd152313a502d9f0u64,
    0x3fd914a8635bf800u64,
    0xbd1766b52ee6307du64,
    0x3fd8b639a88b3000u64,
    0xbd205ae1e5e70470u64,
    0x3fd85855776dc800u64,
    0x3d2fd56f3333778au64,
    0x3fd7fafa3bd81800u64,
    0xbd272090c812566au64,
    0x3fd79e26687cf800u64,
    0x3d29ec7d2efd1778u64,
    0x3fd741d876c67800u64,
    0x3d2d8b0949dc60b3u64,
    0x3fd6e60ee6af1800u64,
    0x3d1721657c222d87u64,
    0x3fd68ac83e9c6800u64,
    0x3d20a0d32756eba0u64,
    0x3fd630030b3ab000u64,
    0xbd2db623e731ae00u64,
    0x3fd5d5bddf596000u64,
    0xbd0a0b2a08a465dcu64,
    0x3fd57bf753c8d000u64,
    0x3d1fadedee5d40efu64,
    0x3fd522ae0738a000u64,
    0x3d2ebe708164c759u64,
    0x3fd4c9e09e173000u64,
    0xbd2e20891b0ad8a4u64,
    0x3fd4718dc271c800u64,
    0xbd2f27ce0967d675u64,
    0x3fd419b423d5e800u64,
    0x3d08e436ec90e09du64,
    0x3fd3c25277333000u64,
    0x3d183b54b606bd5cu64,
    0x3fd36b6776be1000u64,
    0x3d116ecdb0f177c8u64,
    0x3fd314f1e1d36000u64,
    0xbd28e27ad3213cb8u64,
    0x3fd2bef07cdc9000u64,
    0x3d2a9cfa4a5004f4u64,
    0x3fd269621134d800u64,
    0x3d2c93c1df5bb3b6u64,
    0x3fd214456d0eb800u64,
    0x3d0a87deba46baeau64,
    0x3fd1bf99635a6800u64,
    0x3d2ca6ed5147bdb7u64,
    0x3fd16b5ccbacf800u64,
    0x3d2b9acdf7a51681u64,
    0x3fd1178e8227e800u64,
    0xbd2c210e63a5f01cu64,
    0x3fd0c42d67616000u64,
    0x3d27188b163ceae9u64,
    0x3fd07138604d5800u64,
    0x3cf89cdb16ed4e91u64,
    0x3fd01eae5626c800u64,
    0xbd16f08c1485e94au64,
    0x3fcf991c6cb3b000u64,
    0x3d1bcbecca0cdf30u64,
    0x3fcef5ade4dd0000u64,
    0xbcca211565bb8e11u64,
    0x3fce530effe71000u64,
    0x3cc212276041f430u64,
    0x3fcdb13db0d49000u64,
    0xbd2aff2af715b035u64,
    0x3fcd1037f2656000u64,
    0xbd084a7e75b6f6e4u64,
    0x3fcc6ffbc6f01000u64,
    0xbcf1ec72c5962bd2u64,
    0x3fcbd087383be000u64,
    0xbd2d4bc4595412b6u64,
    0x3fcb31d8575bd000u64,
    0xbd0c358d4eace1aau64,
    0x3fca93ed3c8ae000u64,
    0xbd28724350562169u64,
    0x3fc9f6c407089000u64,
    0x3d29904d6865817au64,
    0x3fc95a5adcf70000u64,
    0x3d07f22858a0ff6fu64,
    0x3fc8beafeb390000u64,
    0xbd073d54aae92cd1u64,
    0x3fc823c16551a000u64,
    0x3d1e0ddb9a631e83u64,
    0x3fc7898d85445000u64,
    0xbd1c661070914305u64,
    0x3fc6f0128b757000u64,
    0xbd25118de59c21e1u64,
    0x3fc6574ebe8c1000u64,
    0x3d19cf8b2c3c2e78u64,
    0x3fc5bf406b544000u64,
    0xbd127023eb68981cu64,
    0x3fc527e5e4a1b000u64,
    0x3d2633e8e5697dc7u64,
    0x3fc4913d8333b000u64,
    0x3d25837954fdb678u64,
    0x3fc3fb45a5993000u64,
    0xbd2cd1d87e6a354du64,
    0x3fc365fcb0159000u64,
    0x3cc62fa8234b7289u64,
    0x3fc2d1610c868000u64,
    0x3d039d6ccb81b4a1u64,
    0x3fc23d712a49c000u64,
    0x3d100d238fd3df5cu64,
    0x3fc1aa2b7e23f000u64,
    0x3d2ca78e44389934u64,
    0x3fc1178e8227e000u64,
    0x3d21ef78ce2d07f2u64,
    0x3fc08598b59e4000u64,
    0xbd27e5dd7009902cu64,
    0x3fbfe89139dbe000u64,
    0xbd2534d64fa10afdu64,
    0x3fbec739830a2000u64,
    0xbd2dc068afe645e0u64,
    0x3fbda72763844000u64,
    0x3d1a89401fa71733u64,
    0x3fbc885801bc4000u64,
    0x3d2646d1c65aacd3u64,
    0x3fbb6ac88dad6000u64,
    0xbd1390802bf768e5u64,
    0x3fba4e7640b1c000u64,
    0xbd0e42b6b94407c8u64,
    0x3fb9335e5d594000u64,
    0x3d23115c3abd47dau64,
    0x3fb8197e2f40e000u64,
    0x3d0f80dcf96ffdf7u64,
    0x3fb700d30aeac000u64,
    0x3cec1e8da99ded32u64,
    0x3fb5e95a4d97a000u64,
    0xbd2c69063c5d1d1eu64,
    0x3fb4d3115d208000u64,
    0xbcf53a2582f4e1efu64,
    0x3fb3bdf5a7d1e000u64,
    0x3d2cc85ea5db4ed7u64,
    0x3fb2aa04a4472000u64,
    0xbd20b6e8ae9c697du64,
    0x3fb1973bd1466000u64,
    0xbd25325d560d9e9bu64,
    0x3fb08598b59e4000u64,
    0xbd17e5dd7009902cu64,
    0x3faeea31c006c000u64,
    0xbd0e113e4fc93b7bu64,
    0x3faccb73cdddc000u64,
    0xbd1a68f247d82807u64,
    0x3faaaef2d0fb0000u64,
    0x3d20fc1a353bb42eu64,
    0x3fa894aa149fc000u64,
    0xbd197995d05a267du64,
    0x3fa67c94f2d4c000u64,
    0xbd029efbec19afa2u64,
    0x3fa466aed42e0000u64,
    0xbd2c167375bdfd28u64,
    0x3fa252f32f8d0000u64,
    0x3d283e9ae021b67bu64,
    0x3fa0415d89e74000u64,
    0x3d0111c05cf1d753u64,
    0x3f9c63d2ec148000u64,
    0x3d2578c63f9eb2f3u64,
    0x3f98492528c90000u64,
    0xbd2aa0ba325a0c34u64,
    0x3f9432a925980000u64,
    0x3d098139928637feu64,
    0x3f90205658938000u64,
    0xbd23dc5b06e2f7d2u64,
    0x3f882448a3890000u64,
    0xbd275577da74f640u64,
    0x3f80101575890000u64,
    0xbd10c76b999d2be8u64,
    0x3f70080559580000u64,
    0x3d2166afcb31c67bu64,
    0x0000000000000000u64,
    0x8000000000000000u64,
];
