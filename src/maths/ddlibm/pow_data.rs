// Generated offline at 300-bit precision.

pub(super) const POW_LOG_TABLE_BITS: u32 = 9;
pub(super) const POW_EXP_TABLE_BITS: u32 = 8;

// -log2(B_i) for B_i = (512 + i) / 1024, i in 0..=512, stored as (hi, lo) pairs.
// hi is a multiple of 2^-42.
pub(super) const POW_LOG2_TAB_U64: [u64; 1026] = [
    0x3ff0000000000000u64,
    0x0000000000000000u64,
    0x3fefe8f07c00f800u64,
    0xbd33ab2631d4676du64,
    0x3fefd1ec77250800u64,
    0x3d35388b52642db7u64,
    0x3fefbaf3e5fb6800u64,
    0x3d11790209e88471u64,
    0x3fefa406bd244000u64,
    0x3d3ef5d00e390a00u64,
    0x3fef8d24f150b800u64,
    0x3d3754e95c6a4ad8u64,
    0x3fef764e7742b800u64,
    0xbd3ec312ed069b24u64,
    0x3fef5f8343ccc000u64,
    0xbd374a4cb0be9e8au64,
    0x3fef48c34bd1e800u64,
    0x3d26eb3ac8ec0ef7u64,
    0x3fef320e8445b000u64,
    0x3d34cf6b3e0185a2u64,
    0x3fef1b64e22bd800u64,
    0xbd0f0cccdd01ee2fu64,
    0x3fef04c65a984000u64,
    0xbd3a5671e1bd4ae8u64,
    0x3feeee32e2aed000u64,
    0xbd3a0976c0a2827du64,
    0x3feed7aa6fa35800u64,
    0x3d1e14ebaf30c95eu64,
    0x3feec12cf6b97800u64,
    0x3d32ecefec5a47e0u64,
    0x3feeaaba6d447000u64,
    0x3d395432268e3e1eu64,
    0x3fee9452c8a71000u64,
    0x3cf3c6764fc87b4au64,
    0x3fee7df5fe538800u64,
    0x3d359a77da8ad64au64,
    0x3fee67a403cb6800u64,
    0x3d3735cfaf8e2578u64,
    0x3fee515cce9f6800u64,
    0x3d304725738f699eu64,
    0x3fee3b20546f5800u64,
    0xbd35af7a7c7c34f3u64,
    0x3fee24ee8ae9f000u64,
    0x3d18a0e14f76d994u64,
    0x3fee0ec767ccd800u64,
    0x3d36302f197ca224u64,
    0x3fedf8aae0e47000u64,
    0xbd153121e9af5428u64,
    0x3fede298ec0bb000u64,
    0xbd3f9ab3cf74babau64,
    0x3fedcc917f2c1800u64,
    0xbd3f09941811b2eeu64,
    0x3fedb694903d9800u64,
    0xbd3a3c89a2cf3516u64,
    0x3feda0a215466800u64,
    0x3d291b415eeb24edu64,
    0x3fed8aba045b0000u64,
    0x3d2c7a4ff65ddbc9u64,
    0x3fed74dc539de800u64,
    0xbd385a047f97bb3eu64,
    0x3fed5f08f93f9800u64,
    0x3d1124ac34b21259u64,
    0x3fed493feb7e8800u64,
    0xbd34f286d207e2c8u64,
    0x3fed338120a6e000u64,
    0xbd33167ccc538261u64,
    0x3fed1dcc8f128000u64,
    0x3d357a036639e53au64,
    0x3fed08222d28e800u64,
    0x3d3d7ec3be51cdcbu64,
    0x3fecf281f15f0800u64,
    0x3d3f38e940118241u64,
    0x3fecdcebd2373800u64,
    0x3d294aa31b9b6d65u64,
    0x3fecc75fc6411800u64,
    0xbd38723279ebfab6u64,
    0x3fecb1ddc4197000u64,
    0xbd124fad116078efu64,
    0x3fec9c65c26a3000u64,
    0x3d39195e52c2b4ffu64,
    0x3fec86f7b7ea4800u64,
    0x3d34459c4d3a591bu64,
    0x3fec71939b5d8800u64,
    0x3d058b34834a501eu64,
    0x3fec5c3963949000u64,
    0xbd06d26859c7991eu64,
    0x3fec46e9076cc000u64,
    0xbd3ddb7886f88587u64,
    0x3fec31a27dd00800u64,
    0x3d3a4de3424a2624u64,
    0x3fec1c65bdb50000u64,
    0x3d3e742a6951096du64,
    0x3fec0732be1ea000u64,
    0xbce49209a68c72a1u64,
    0x3febf209761c3800u64,
    0xbd30e0f9c896007du64,
    0x3febdce9dcc96000u64,
    0x3d2871a7610e40bdu64,
    0x3febc7d3e94df000u64,
    0xbd31da156756faadu64,
    0x3febb2c792ddc000u64,
    0xbd28b7fcd690403eu64,
    0x3feb9dc4d0b8b800u64,
    0x3d32836bac777dd6u64,
    0x3feb88cb9a2ab800u64,
    0xbd36f6bd48a860f0u64,
    0x3feb73dbe68b5800u64,
    0x3d30dd830ee74ef2u64,
    0x3feb5ef5ad3e1800u64,
    0xbd28fe35da2ab291u64,
    0x3feb4a18e5b20800u64,
    0xbd3fb9b1aaf54bccu64,
    0x3feb35458761d800u64,
    0xbd3c343ea3e580ebu64,
    0x3feb207b89d3c000u64,
    0xbd3f1140264356b8u64,
    0x3feb0bbae4996000u64,
    0xbd34c7e0166e1f56u64,
    0x3feaf7038f4fb800u64,
    0xbd3d449e80431d92u64,
    0x3feae255819f0000u64,
    0x3d31659d8e2d7d38u64,
    0x3feacdb0b33ab800u64,
    0x3d2370693afbcdb1u64,
    0x3feab9151be16800u64,
    0x3d1badba7fbb3d20u64,
    0x3feaa482b35ca800u64,
    0x3d2cea9347cb6655u64,
    0x3fea8ff971810800u64,
    0x3d32f0c0bfe9dbecu64,
    0x3fea7b794e2df800u64,
    0x3d3861e01d200ce1u64,
    0x3fea6702414db800u64,
    0x3d39d3066758fb3du64,
    0x3fea529442d54800u64,
    0xbd2f7081b8e33aadu64,
    0x3fea3e2f4ac44000u64,
    0xbd13f94e00e7d6bcu64,
    0x3fea29d35124e000u64,
    0x3d22280434bda911u64,
    0x3fea15804e0be800u64,
    0x3d1108740d92f890u64,
    0x3fea013639988000u64,
    0x3d3d25cfd9459b34u64,
    0x3fe9ecf50bf44000u64,
    0xbd1d97ee9124773bu64,
    0x3fe9d8bcbd52f000u64,
    0x3d3e665e245fe368u64,
    0x3fe9c48d45f2b800u64,
    0xbd36d76b9a843329u64,
    0x3fe9b0669e1bc000u64,
    0xbd210f7ac89c6f2du64,
    0x3fe99c48be206000u64,
    0x3d3e41fa0a62e6aeu64,
    0x3fe988339e5cf800u64,
    0x3d3c5667a12e8f30u64,
    0x3fe974273737d000u64,
    0x3d2e54d71deb636au64,
    0x3fe9602381211800u64,
    0xbd373af6b5487f35u64,
    0x3fe94c287492c800u64,
    0xbd3927dfc23d9780u64,
    0x3fe938360a10a000u64,
    0x3d2601ccfac2b557u64,
    0x3fe9244c3a281800u64,
    0x3d342d2824e663a1u64,
    0x3fe9106afd704000u64,
    0xbd1b76a46f31880au64,
    0x3fe8fc924c89b000u64,
    0xbd3bdc81c4db3134u64,
    0x3fe8e8c2201e8000u64,
    0xbd304cc6600a133eu64,
    0x3fe8d4fa70e24000u64,
    0xbd3b912d8994b162u64,
    0x3fe8c13b3791d000u64,
    0xbd20009770ea1465u64,
    0x3fe8ad846cf36800u64,
    0x3d2a40dc2d2a6bf7u64,
    0x3fe899d609d68000u64,
    0xbd269affffe47644u64,
    0x3fe886300713b000u64,
    0xbd301dc37c84e79au64,
    0x3fe872925d8cb800u64,
    0xbd2953e61f15bd9bu64,
    0x3fe85efd062c6800u64,
    0xbd34998f93e7aa3cu64,
    0x3fe84b6ff9e68800u64,
    0x3cf5c14e55f57802u64,
    0x3fe837eb31b7e000u64,
    0xbd3e4e8eea54ce63u64,
    0x3fe8246ea6a60000u64,
    0x3d0aaa72ba2c6ba2u64,
    0x3fe810fa51bf6800u64,
    0xbd30144751b3314fu64,
    0x3fe7fd8e2c1b4000u64,
    0x3d2a15a5b343a140u64,
    0x3fe7ea2a2ed98000u64,
    0xbd398eec5e85b29fu64,
    0x3fe7d6ce5322a800u64,
    0xbd1b361c7dddadb6u64,
    0x3fe7c37a9227e800u64,
    0xbcc2de0634d33aa9u64,
    0x3fe7b02ee522f000u64,
    0xbce024b5b4e89254u64,
    0x3fe79ceb4555e800u64,
    0x3d35c56c13816f9fu64,
    0x3fe789afac0b7000u64,
    0x3d1f4c2417f39394u64,
    0x3fe7767c12967800u64,
    0x3d3228d3da3e961bu64,
    0x3fe7635072525000u64,
    0xbd1a5bd9bcda22fdu64,
    0x3fe7502cc4a27800u64,
    0x3d3c029a071eeb10u64,
    0x3fe73d1102f2c000u64,
    0x3d13045428f88499u64,
    0x3fe729fd26b70800u64,
    0xbcfc14a31ce1b7e3u64,
    0x3fe716f1296b5800u64,
    0xbd38c9a2f2dbcaf9u64,
    0x3fe703ed0493b800u64,
    0x3d1ecd417972c083u64,
    0x3fe6f0f0b1bc4800u64,
    0xbd38e36471414f76u64,
    0x3fe6ddfc2a790000u64,
    0xbd3ce60916e52e91u64,
    0x3fe6cb0f6865c800u64,
    0x3d1d406db502402du64,
    0x3fe6b82a65267000u64,
    0xbd3a0d8c0e85a909u64,
    0x3fe6a54d1a667800u64,
    0xbd2dafbfd96d5335u64,
    0x3fe6927781d93000u64,
    0x3d354243b21709ceu64,
    0x3fe67fa99539a000u64,
    0x3d33c1a3716ee61fu64,
    0x3fe66ce34e4a6800u64,
    0x3d3f29947070fc4bu64,
    0x3fe65a24a6d5d000u64,
    0xbd20c369fc5a3d9bu64,
    0x3fe6476d98ad9800u64,
    0x3d20993376649b50u64,
    0x3fe634be1dab1800u64,
    0x3d1664deafdbfed5u64,
    0x3fe622162faf1000u64,
    0x3d282b53e791792du64,
    0x3fe60f75c8a1b000u64,
    0x3ccc79237996a42bu64,
    0x3fe5fcdce2728000u64,
    0xbd3125d6cbcd1095u64,
    0x3fe5ea4b77185800u64,
    0xbd3194cfcc6c23cfu64,
    0x3fe5d7c180915800u64,
    0x3cee35952fb0019du64,
    0x3fe5c53ef8e2e000u64,
    0xbd2286fbc7f749ffu64,
    0x3fe5b2c3da197000u64,
    0x3d31d406db502403u64,
    0x3fe5a0501e48c000u64,
    0xbd35dcccaf649933u64,
    0x3fe58de3bf8b8000u64,
    0x3d3258110a38f4e9u64,
    0x3fe57b7eb8039000u64,
    0xbd0432648cfc8738u64,
    0x3fe5692101d9b800u64,
    0xbd3acdf73d83987fu64,
    0x3fe556ca973db800u64,
    0xbd2e6c522ceda3fbu64,
    0x3fe5447b72664000u64,
    0x3d3cd53be1f94c50u64,
    0x3fe532338d90f000u64,
    0xbd3c70f15d3ebabdu64,
    0x3fe51ff2e3021800u64,
    0xbd3a1e7e802c4828u64,
    0x3fe50db96d04e800u64,
    0x3d351a6bb8ad2771u64,
    0x3fe4fb8725eb5800u64,
    0x3d3d49a43fc62b7eu64,
    0x3fe4e95c080e0800u64,
    0x3d3047dc280daad1u64,
    0x3fe4d7380dcc4000u64,
    0x3d31646b761c48deu64,
    0x3fe4c51b318bf000u64,
    0x3cfb88755d6ca189u64,
    0x3fe4b3056db99800u64,
    0xbd32e1a3152150d3u64,
    0x3fe4a0f6bcc84000u64,
    0xbd206adfcaa4bcf5u64,
    0x3fe48eef19317800u64,
    0x3d290d43956fa5d8u64,
    0x3fe47cee7d754800u64,
    0x3d27158a37417c3au64,
    0x3fe46af4e41a2000u64,
    0xbd1829434d994a2au64,
    0x3fe4590247acd000u64,
    0xbd2c3e1e30d370eau64,
    0x3fe44716a2c08000u64,
    0x3d33106e404cabb7u64,
    0x3fe43531efeeb800u64,
    0xbd2788eba5c173eeu64,
    0x3fe4235429d72800u64,
    0x3d34eea27240b049u64,
    0x3fe4117d4b1fd800u64,
    0x3d30037a1cc74f0eu64,
    0x3fe3ffad4e74f000u64,
    0x3d2d5e6a8a4fb059u64,
    0x3fe3ede42e88c800u64,
    0xbd0edb9d09608783u64,
    0x3fe3dc21e613d000u64,
    0xbd18dc7c094eee51u64,
    0x3fe3ca666fd49000u64,
    0x3d33fae191bb5173u64,
    0x3fe3b8b1c68fa800u64,
    0xbd212d25b3252647u64,
    0x3fe3a703e50fa800u64,
    0xbd3906944ba567f4u64,
    0x3fe3955cc6252000u64,
    0xbd2b8d59e8492d6eu64,
    0x3fe383bc64a69800u64,
    0xbd339eec34ce3ce3u64,
    0x3fe37222bb707800u64,
    0xbd3c22d2cad415aeu64,
    0x3fe3608fc5650000u64,
    0x3d3a63aa14f8ca8fu64,
    0x3fe34f037d6c6000u64,
    0xbd03719eb3af5b8du64,
    0x3fe33d7dde747800u64,
    0xbd3feed12980ee19u64,
    0x3fe32bfee370f000u64,
    0xbd2979a5db68721du64,
    0x3fe31a86875b3800u64,
    0x3cf7159b944f7fd7u64,
    0x3fe30914c5327000u64,
    0xbd377e236c73e71bu64,
    0x3fe2f7a997fb5000u64,
    0x3d352e8978a6cc8au64,
    0x3fe2e644fac05000u64,
    0xbcf4275f1035e5e8u64,
    0x3fe2d4e6e8916800u64,
    0xbd3cc58a505d117au64,
    0x3fe2c38f5c842000u64,
    0x3d10bad7dfa568f7u64,
    0x3fe2b23e51b3a000u64,
    0xbd3c27e675df639du64,
    0x3fe2a0f3c3407000u64,
    0x3d06e3cb71b554e7u64,
    0x3fe28fafac50a800u64,
    0x3d3e7958691ddab5u64,
    0x3fe27e72080fd000u64,
    0xbd30d199805b0aecu64,
    0x3fe26d3ad1aec000u64,
    0xbd381e2a51761f86u64,
    0x3fe25c0a0463c000u64,
    0xbd250520a377c7ecu64,
    0x3fe24adf9b6a7000u64,
    0xbcef941453836236u64,
    0x3fe239bb9203c000u64,
    0xbd39e65cd77582e2u64,
    0x3fe2289de375d800u64,
    0x3d201640f615fa5cu64,
    0x3fe217868b0c3800u64,
    0xbce855a216719009u64,
    0x3fe2067584178800u64,
    0xbd3ae66b65d78df9u64,
    0x3fe1f56ac9ed9800u64,
    0x3d3468ff68d6d2d3u64,
    0x3fe1e46657e98000u64,
    0xbd33de15e265b5d9u64,
    0x3fe1d368296b5000u64,
    0x3d32a606046ad444u64,
    0x3fe1c27039d85800u64,
    0xbd1a3f6c066ebdd5u64,
    0x3fe1b17e849ae000u64,
    0xbd3ecf4dff1e8ea2u64,
    0x3fe1a09305223800u64,
    0x3d3e57e89bfdfd51u64,
    0x3fe18fadb6e2d000u64,
    0x3d3e0cda8bd74461u64,
    0x3fe17ece95560000u64,
    0xbd346fab3fa1a144u64,
    0x3fe16df59bfa0800u64,
    0xbd23ea90adf6a54au64,
    0x3fe15d22c6522800u64,
    0x3d36c3d8ec0f3731u64,
    0x3fe14c560fe68800u64,
    0x3d37c407050799bfu64,
    0x3fe13b8f74442800u64,
    0xbd148ad9b560f3b7u64,
    0x3fe12aceeefcd800u64,
    0x3cf1bfb62d6a3aa8u64,
    0x3fe11a147ba74800u64,
    0xbd2ac444ea257ffau64,
    0x3fe1096015dee800u64,
    0xbd39313aec658458u64,
    0x3fe0f8b1b943e800u64,
    0x3d2a140de4db9aafu64,
    0x3fe0e809617b4800u64,
    0xbd24c06f912ab9d1u64,
    0x3fe0d7670a2ea000u64,
    0x3d3b3d5a7b1c2994u64,
    0x3fe0c6caaf0c5800u64,
    0xbd33483146784bd2u64,
    0x3fe0b6344bc75800u64,
    0x3d3737eae0272ba4u64,
    0x3fe0a5a3dc175000u64,
    0x3d30c6b068d867f1u64,
    0x3fe095195bb87800u64,
    0xbd3cc65b96825ec6u64,
    0x3fe08494c66b9000u64,
    0xbd2103e8f00d41c8u64,
    0x3fe0741617f60000u64,
    0xbd3ebdb1bbaf9ab0u64,
    0x3fe0639d4c21a000u64,
    0xbd350343f8df4b43u64,
    0x3fe0532a5ebcd800u64,
    0xbd3db11aa6a7cdeau64,
    0x3fe042bd4b9a8000u64,
    0xbd3b3b3864c60011u64,
    0x3fe032560e91e800u64,
    0xbd3310f9839f068au64,
    0x3fe021f4a37ec800u64,
    0x3d3fd7715c999d62u64,
    0x3fe0119906415000u64,
    0x3d3acf149e378051u64,
    0x3fe0014332be0000u64,
    0x3cf9518ce032f41du64,
    0x3fdfe1e649bb6000u64,
    0x3d29ab66b62c5ca8u64,
    0x3fdfc151b11b3000u64,
    0x3d39006e6a042173u64,
    0x3fdfa0c8937e8000u64,
    0xbd2515e1cacac36eu64,
    0x3fdf804ae8d0d000u64,
    0xbd27f33943464056u64,
    0x3fdf5fd8a9064000u64,
    0xbd1cb6f70109b0f1u64,
    0x3fdf3f71cc1b6000u64,
    0x3d24dc166e0e0c68u64,
    0x3fdf1f164a154000u64,
    0xbd3d990d1e0f6657u64,
    0x3fdefec61b012000u64,
    0xbcfea92d9e0e8ac2u64,
    0x3fdede8136f4d000u64,
    0xbd303cf98ab4e537u64,
    0x3fdebe47960e4000u64,
    0xbd2fbc00d8d6cbcfu64,
    0x3fde9e193073b000u64,
    0xbd2fd3fe3499ea9fu64,
    0x3fde7df5fe539000u64,
    0xbd3532c412ba94dbu64,
    0x3fde5dddf7e47000u64,
    0xbd1f5ab329b483ecu64,
    0x3fde3dd115650000u64,
    0x3d3f77628aa1aed8u64,
    0x3fde1dcf4f1c2000u64,
    0xbd35897d184aaac4u64,
    0x3fddfdd89d587000u64,
    0xbd1d4f639bb5cdf6u64,
    0x3fddddecf870c000u64,
    0x3d3305af9767a020u64,
    0x3fddbe0c58c3d000u64,
    0xbcccb52b4581174du64,
    0x3fdd9e36b6b82000u64,
    0x3d36c28f5a9b58fdu64,
    0x3fdd7e6c0abc3000u64,
    0x3d35e30f52d6ae75u64,
    0x3fdd5eac4d464000u64,
    0xbd2410f5d3161a62u64,
    0x3fdd3ef776d44000u64,
    0xbcc81e2b378ff59du64,
    0x3fdd1f4d7fec0000u64,
    0xbd3e6009faee4be8u64,
    0x3fdcffae611ad000u64,
    0x3d12b628e2d05d76u64,
    0x3fdce01a12f5e000u64,
    0xbd3cbb828084fcb1u64,
    0x3fdcc0908e19b000u64,
    0x3d3ef474f1e559feu64,
    0x3fdca111cb2aa000u64,
    0x3d37150fe371d52bu64,
    0x3fdc819dc2d46000u64,
    0xbcdbc76a2753b99bu64,
    0x3fdc62346dca2000u64,
    0xbd2012f1593ee62au64,
    0x3fdc42d5c4c69000u64,
    0xbd3d30c3d2643639u64,
    0x3fdc2381c08bb000u64,
    0xbd062c45c4bc31c9u64,
    0x3fdc043859e30000u64,
    0xbd22642415d47384u64,
    0x3fdbe4f9899d3000u64,
    0x3d2372fd3ff3197bu64,
    0x3fdbc5c548925000u64,
    0x3d332e75785e97abu64,
    0x3fdba69b8fa1b000u64,
    0xbd33f65cadbe0d26u64,
    0x3fdb877c57b1b000u64,
    0x3cfbfbf899cf2b3cu64,
    0x3fdb686799b01000u64,
    0xbd307470f69809ccu64,
    0x3fdb495d4e918000u64,
    0x3d37dd4bcb97f73cu64,
    0x3fdb2a5d6f520000u64,
    0xbcff5369fdf426cfu64,
    0x3fdb0b67f4f47000u64,
    0xbd3fc02bc277071du64,
    0x3fdaec7cd882b000u64,
    0x3d31ae4acee67d8du64,
    0x3fdacd9c130dd000u64,
    0x3d34fd7061311744u64,
    0x3fdaaec59dadb000u64,
    0xbd22100986691daau64,
    0x3fda8ff971811000u64,
    0xbd36879fa00b120au64,
    0x3fda713787ad9000u64,
    0x3d3e92e07396497fu64,
    0x3fda527fd95fe000u64,
    0xbd3c03254a7145e3u64,
    0x3fda33d25fcb2000u64,
    0xbcf4f144da6e4533u64,
    0x3fda152f14298000u64,
    0x3d1b3d7b0e65d2ceu64,
    0x3fd9f695efbbd000u64,
    0x3d0dd3d30f5deaa7u64,
    0x3fd9d806ebc99000u64,
    0x3d20dc60dc5befecu64,
    0x3fd9b98201a0f000u64,
    0x3d3012bca9820885u64,
    0x3fd99b072a96c000u64,
    0x3d3ac9bca36fd02eu64,
    0x3fd97c9660067000u64,
    0x3d256a9ae5dca5a3u64,
    0x3fd95e2f9b51f000u64,
    0x3cf38bc99b3611ceu64,
    0x3fd93fd2d5e1c000u64,
    0xbd0c6d2c37daf317u64,
    0x3fd921800924e000u64,
    0xbd262404772a151du64,
    0x3fd903372e90c000u64,
    0xbd11c0de7b779cb3u64,
    0x3fd8e4f83fa14000u64,
    0x3d37b6bf20f1e8c4u64,
    0x3fd8c6c335d8c000u64,
    0xbd3a69393bab4fd0u64,
    0x3fd8a8980abfc000u64,
    0xbd266cccab240e90u64,
    0x3fd88a76b7e55000u64,
    0xbd38e9b57298d22fu64,
    0x3fd86c5f36dea000u64,
    0x3d2eddd33ea4d6f1u64,
    0x3fd84e5181475000u64,
    0x3d3123e24ebf7a85u64,
    0x3fd8304d90c12000u64,
    0xbce66ae2a7ada553u64,
    0x3fd812535ef40000u64,
    0xbd0cd57d9d86514eu64,
    0x3fd7f462e58e1000u64,
    0x3d3a20a0968271abu64,
    0x3fd7d67c1e43b000u64,
    0xbd1a46dbdcc762d3u64,
    0x3fd7b89f02cf3000u64,
    0xbd354b383b0e8a55u64,
    0x3fd79acb8cf10000u64,
    0x3d2c7d469ea019adu64,
    0x3fd77d01b66fc000u64,
    0xbd264adb1adca9a8u64,
    0x3fd75f417917e000u64,
    0x3ce5c601f0626dc8u64,
    0x3fd7418acebbf000u64,
    0x3d18eb650003fb32u64,
    0x3fd723ddb1347000u64,
    0xbd326baaf0b591f8u64,
    0x3fd7063a1a5fb000u64,
    0x3d33c8e5e378b903u64,
    0x3fd6e8a004222000u64,
    0xbd33859a74f0d148u64,
    0x3fd6cb0f6865d000u64,
    0xbd3c57f2495fb7fau64,
    0x3fd6ad88411ac000u64,
    0xbcd5dc21a39bf974u64,
    0x3fd6900a8836d000u64,
    0x3d0aa0e9e6bca777u64,
    0x3fd6729637b59000u64,
    0x3d305e0b60be7bf0u64,
    0x3fd6552b49986000u64,
    0x3d23bb5921006679u64,
    0x3fd637c9b7e65000u64,
    0xbd21f3e0c466e8f9u64,
    0x3fd61a717cac2000u64,
    0xbd39f3ba83f85c08u64,
    0x3fd5fd2291fc3000u64,
    0x3d2e77ad7a4b71c0u64,
    0x3fd5dfdcf1eeb000u64,
    0xbd1f1bbd2926f164u64,
    0x3fd5c2a096a13000u64,
    0x3d3770d330890c82u64,
    0x3fd5a56d7a371000u64,
    0xbd2094ef49b8484bu64,
    0x3fd5884396d90000u64,
    0x3d3c08f153245ce9u64,
    0x3fd56b22e6b58000u64,
    0xbd3c6d8d86531d56u64,
    0x3fd54e0b64004000u64,
    0xbd323e7492de8d74u64,
    0x3fd530fd08f2a000u64,
    0xbcf63d8bd35fdc18u64,
    0x3fd513f7cfcb7000u64,
    0xbd3cc78dae939320u64,
    0x3fd4f6fbb2cec000u64,
    0x3d3661e393a16b95u64,
    0x3fd4da08ac465000u64,
    0xbd3a96d7a36f1545u64,
    0x3fd4bd1eb680e000u64,
    0x3d351ea1cbe86c17u64,
    0x3fd4a03dcbd2e000u64,
    0x3d1bdc90791aef03u64,
    0x3fd48365e695d000u64,
    0x3d3e5aa8a607f6efu64,
    0x3fd466970128b000u64,
    0xbd39e35c1aa7693fu64,
    0x3fd449d115ef8000u64,
    0xbd23c49c247ab6afu64,
    0x3fd42d141f53b000u64,
    0x3d39164bd30a2a55u64,
    0x3fd4106017c3f000u64,
    0xbd2aeb8cb1ac05cdu64,
    0x3fd3f3b4f9b3f000u64,
    0xbd3b1b8ae4633046u64,
    0x3fd3d712bf9ca000u64,
    0xbd20899cee46ebe4u64,
    0x3fd3ba7963fc2000u64,
    0xbcfc4413fd83dec1u64,
    0x3fd39de8e155a000u64,
    0xbd02101a9685c779u64,
    0x3fd3816132316000u64,
    0x3d347f166d505f91u64,
    0x3fd364e2511cd000u64,
    0xbd3f7cc3df8803d1u64,
    0x3fd3486c38aa3000u64,
    0xbd3961ecab44052eu64,
    0x3fd32bfee370f000u64,
    0xbd1979a5db68721du64,
    0x3fd30f9a4c0d8000u64,
    0xbd3e4ce321e589a9u64,
    0x3fd2f33e6d212000u64,
    0x3d0e321d11f8a0ceu64,
    0x3fd2d6eb41523000u64,
    0x3d227ae8037b21bfu64,
    0x3fd2baa0c34be000u64,
    0x3d1ebefecd51a1bfu64,
    0x3fd29e5eedbe5000u64,
    0xbd372c2fed3f759fu64,
    0x3fd28225bb5e6000u64,
    0x3d328fa3aac2fde9u64,
    0x3fd265f526e60000u64,
    0x3d2e59ad84a6a593u64,
    0x3fd249cd2b13d000u64,
    0xbd249d97df07e357u64,
    0x3fd22dadc2ab3000u64,
    0x3d325b4b48ebcc9cu64,
    0x3fd21196e8747000u64,
    0x3d2e859780f0cdc7u64,
    0x3fd1f588973c8000u64,
    0x3d3d1c61f4accdd7u64,
    0x3fd1d982c9d52000u64,
    0x3d3c20d74c0211bfu64,
    0x3fd1bd857b14c000u64,
    0x3d145ccfb66fabd2u64,
    0x3fd1a190a5d67000u64,
    0x3d3281a3174c8d06u64,
    0x3fd185a444fa1000u64,
    0xbd36132520b9d027u64,
    0x3fd169c05363f000u64,
    0x3d15872350f805d6u64,
    0x3fd14de4cbfd3000u64,
    0x3d3cf94572df94aeu64,
    0x3fd13211a9b38000u64,
    0x3d309190ea4cc5a4u64,
    0x3fd11646e7791000u64,
    0x3d31a55c2b07d3a5u64,
    0x3fd0fa848044b000u64,
    0x3d2a8843781eda15u64,
    0x3fd0deca6f11b000u64,
    0x3d362b925129e84fu64,
    0x3fd0c318aedff000u64,
    0x3d2e03b336c24b74u64,
    0x3fd0a76f3ab3c000u64,
    0x3d34b0804986cea0u64,
    0x3fd08bce0d960000u64,
    0xbd37204f55bbf90du64,
    0x3fd070352293d000u64,
    0x3d3c91a3dbbb501du64,
    0x3fd054a474bf1000u64,
    0xbd1488084776534au64,
    0x3fd0391bff2dc000u64,
    0xbd2866405210e49eu64,
    0x3fd01d9bbcfa6000u64,
    0x3d1d45da26510033u64,
    0x3fd00223a943e000u64,
    0xbd2f386200388584u64,
    0x3fcfcd677e5ac000u64,
    0x3d3039b772eda08eu64,
    0x3fcf9697f3bd0000u64,
    0x3d399e7676bb0380u64,
    0x3fcf5fd8a9064000u64,
    0xbd0cb6f70109b0f1u64,
    0x3fcf29299496a000u64,
    0x3d311159ca9c9783u64,
    0x3fcef28aacd72000u64,
    0x3d118906313e79cfu64,
    0x3fcebbfbe8390000u64,
    0x3d0a5b363a6f499cu64,
    0x3fce857d3d362000u64,
    0xbd39308437e74325u64,
    0x3fce4f0ea250a000u64,
    0xbd3fef5f3fc61899u64,
    0x3fce18b00e132000u64,
    0xbd3b85f3204507b9u64,
    0x3fcde26177108000u64,
    0x3d3a06e2b9b128bfu64,
    0x3fcdac22d3e44000u64,
    0x3d0d2fe4574e09b9u64,
    0x3fcd75f41b31c000u64,
    0xbd3245829ca653e6u64,
    0x3fcd3fd543a4a000u64,
    0x3d3ab8f49b9239d6u64,
    0x3fcd09c643f12000u64,
    0xbd301f1e98d8979cu64,
    0x3fccd3c712d32000u64,
    0xbd3ded9b44542fd9u64,
    0x3fcc9dd7a70ee000u64,
    0xbd3d400fd651da9au64,
    0x3fcc67f7f770a000u64,
    0x3d29f78153fcfec0u64,
    0x3fcc3227facce000u64,
    0x3d32a0f4c570bacdu64,
    0x3fcbfc67a8000000u64,
    0xbd3667f21fa8423fu64,
    0x3fcbc6b6f5ee2000u64,
    0xbd1b254cabaa042bu64,
    0x3fcb9115db83a000u64,
    0x3d1ee969a95f528fu64,
    0x3fcb5b844fb4c000u64,
    0xbd3821d36e0b7548u64,
    0x3fcb2602497d6000u64,
    0xbd3974e6432d9ee8u64,
    0x3fcaf08fbfe16000u64,
    0xbd1d74d044558154u64,
    0x3fcabb2ca9ec8000u64,
    0xbd371b3a63cddadfu64,
    0x3fca85d8feb20000u64,
    0x3d17b6aad08dc20fu64,
    0x3fca5094b54d2000u64,
    0x3d3050809db75676u64,
    0x3fca1b5fc4e0c000u64,
    0xbd373647bf25fa5fu64,
    0x3fc9e63a24972000u64,
    0xbcf742a6b2827cf0u64,
    0x3fc9b123cba28000u64,
    0xbd02d3bbd925734bu64,
    0x3fc97c1cb13c8000u64,
    0xbd03f7a55cd2af4cu64,
    0x3fc94724cca66000u64,
    0xbd308364fa508035u64,
    0x3fc9123c1528c000u64,
    0x3d2b37bd36337985u64,
    0x3fc8dd6282140000u64,
    0x3d22a424c693063du64,
    0x3fc8a8980abfc000u64,
    0xbd166cccab240e90u64,
    0x3fc873dca68b0000u64,
    0x3d2bce65acc07927u64,
    0x3fc83f304cdc6000u64,
    0xbd25651ccd0e0880u64,
    0x3fc80a92f5218000u64,
    0x3d3598549757a6cdu64,
    0x3fc7d60496cfc000u64,
    0xbd22ce6312ebb81du64,
    0x3fc7a18529636000u64,
    0xbd2b6967f02b01d8u64,
    0x3fc76d14a4602000u64,
    0xbd3bb55730409355u64,
    0x3fc738b2ff50c000u64,
    0x3d395a9ce370065cu64,
    0x3fc7046031c7a000u64,
    0xbceed0798d1aa217u64,
    0x3fc6d01c335dc000u64,
    0x3d33691fa9535345u64,
    0x3fc69be6fbb3a000u64,
    0x3d34ded0cc0d43bau64,
    0x3fc667c08270c000u64,
    0xbd2bebde1ac6e983u64,
    0x3fc633a8bf438000u64,
    0xbd18f7aac147fdc1u64,
    0x3fc5ff9fa9e18000u64,
    0x3d2653a2eb403f26u64,
    0x3fc5cba53a076000u64,
    0x3d1769a8e6b40f5eu64,
    0x3fc597b96778a000u64,
    0xbd1770535b322bbfu64,
    0x3fc563dc29ffa000u64,
    0x3d3964190e41bca7u64,
    0x3fc5300d796e0000u64,
    0xbd398cc3b5d08e15u64,
    0x3fc4fc4d4d9bc000u64,
    0xbd39d941e9e746a4u64,
    0x3fc4c89b9e680000u64,
    0x3d2fd2e802de76adu64,
    0x3fc494f863b8e000u64,
    0xbcf968ab16b0d7bau64,
    0x3fc46163957b0000u64,
    0xbd3fa4a9eb6b8621u64,
    0x3fc42ddd2ba1c000u64,
    0xbd36ad5bac74b87fu64,
    0x3fc3fa651e276000u64,
    0x3d057c1b79ee9964u64,
    0x3fc3c6fb650ce000u64,
    0xbd0af5e9bb5386c2u64,
    0x3fc3939ff859c000u64,
    0xbce8467191344d58u64,
    0x3fc36052d01c4000u64,
    0xbd1148dad646cb9du64,
    0x3fc32d13e4692000u64,
    0x3d3d6d57e540628eu64,
    0x3fc2f9e32d5c0000u64,
    0xbd117b2f1731efbeu64,
    0x3fc2c6c0a316a000u64,
    0x3d25005be8c5610bu64,
    0x3fc293ac3dc1a000u64,
    0x3d29a1979619fe2fu64,
    0x3fc260a5f58c0000u64,
    0x3d15ebe99c4f6416u64,
    0x3fc22dadc2ab4000u64,
    0xbd36d25a5b8a19b2u64,
    0x3fc1fac39d5b2000u64,
    0x3d30181b3da6a0d2u64,
    0x3fc1c7e77dde4000u64,
    0xbd3848e9d1d92d88u64,
    0x3fc195195c7d2000u64,
    0xbd3b4aada7453897u64,
    0x3fc162593186e000u64,
    0xbd2640ef87ede14bu64,
    0x3fc12fa6f5510000u64,
    0xbd2da89e835cc3d2u64,
    0x3fc0fd02a0372000u64,
    0x3d2fa6e2ac948d1au64,
    0x3fc0ca6c2a9b6000u64,
    0x3d36819114043b60u64,
    0x3fc097e38ce60000u64,
    0x3d2924ae921f7ecau64,
    0x3fc06568bf858000u64,
    0xbd32994b351f388cu64,
    0x3fc032fbbaee6000u64,
    0x3d3aca1905c241a2u64,
    0x3fc0009c779bc000u64,
    0x3d2ed5a8a2de89dau64,
    0x3fbf9c95dc1d0000u64,
    0x3d3164e932b2d51cu64,
    0x3fbf380e2d9bc000u64,
    0xbd3b20d190c69cffu64,
    0x3fbed3a1d4cdc000u64,
    0xbcf455bedf4083bcu64,
    0x3fbe6f50c2da0000u64,
    0xbd215844900583deu64,
    0x3fbe0b1ae8f30000u64,
    0xbd054cda62d3926eu64,
    0x3fbda70038578000u64,
    0x3d2143e9a0cbd481u64,
    0x3fbd4300a2524000u64,
    0x3d2a82ed66976b91u64,
    0x3fbcdf1c183a0000u64,
    0xbd318c64f0672cf9u64,
    0x3fbc7b528b710000u64,
    0xbd2c760bc9b188c4u64,
    0x3fbc17a3ed65c000u64,
    0xbd2b88ca364674acu64,
    0x3fbbb4102f924000u64,
    0x3d3393c664ed16b7u64,
    0x3fbb5097437cc000u64,
    0xbd24e3eb5884aae7u64,
    0x3fbaed391ab68000u64,
    0xbd38b1aff71c8605u64,
    0x3fba89f5a6dc8000u64,
    0x3d3acbebd7e444ecu64,
    0x3fba26ccd9980000u64,
    0x3d3852899427dd61u64,
    0x3fb9c3bea49d4000u64,
    0xbd2bd849ce4dc635u64,
    0x3fb960caf9abc000u64,
    0xbd206c243749114cu64,
    0x3fb8fdf1ca8f0000u64,
    0xbd3595f2f68d91fdu64,
    0x3fb89b33091d8000u64,
    0xbd3017eb15bb7de4u64,
    0x3fb8388ea7394000u64,
    0x3d1c28798c12cc39u64,
    0x3fb7d60496cfc000u64,
    0xbd12ce6312ebb81du64,
    0x3fb77394c9d94000u64,
    0x3d38d55de5c380feu64,
    0x3fb7113f325a0000u64,
    0xbd3f86493917b407u64,
    0x3fb6af03c2604000u64,
    0xbd10be3a57487484u64,
    0x3fb64ce26c068000u64,
    0xbd2d5297837adb4bu64,
    0x3fb5eadb21718000u64,
    0x3d38a3659ee998b6u64,
    0x3fb588edd4d1c000u64,
    0x3d2d54d244e2aaeeu64,
    0x3fb5271a78624000u64,
    0xbd35f097b0fe80a3u64,
    0x3fb4c560fe68c000u64,
    0xbd3077f1f5f0cc83u64,
    0x3fb463c159364000u64,
    0x3d19367107b8e917u64,
    0x3fb4023b7b26c000u64,
    0xbd33623c81400bcfu64,
    0x3fb3a0cf56a08000u64,
    0xbd33b55bcb161bacu64,
    0x3fb33f7cde14c000u64,
    0x3d2eb3c3bf914b9cu64,
    0x3fb2de4403ffc000u64,
    0x3d34b2b017812280u64,
    0x3fb27d24bae84000u64,
    0xbd3b253dff5e0495u64,
    0x3fb21c1ef55f0000u64,
    0x3d1b08127eec65d2u64,
    0x3fb1bb32a6004000u64,
    0x3d349d0cc62a295eu64,
    0x3fb15a5fbf728000u64,
    0xbd2e63bd0fcda210u64,
    0x3fb0f9a634664000u64,
    0xbd148cd0a7bb24b2u64,
    0x3fb09905f7970000u64,
    0x3d11ef56fa3d37b4u64,
    0x3fb0387efbca8000u64,
    0x3d1a768216f872ebu64,
    0x3fafb02267a18000u64,
    0x3d3696bd4ad39d23u64,
    0x3faeef7925088000u64,
    0x3d3b4eb09b992dceu64,
    0x3fae2f0215938000u64,
    0x3d03f659faac5a20u64,
    0x3fad6ebd1f200000u64,
    0xbd2401fbaaa67e3cu64,
    0x3facaeaa27a00000u64,
    0x3d3120afc612b6d8u64,
    0x3fabeec9151a8000u64,
    0x3d361728d82263edu64,
    0x3fab2f19cdaa8000u64,
    0xbd3c91f073716495u64,
    0x3faa6f9c377e0000u64,
    0xbd3672b0c88d4dd6u64,
    0x3fa9b05038d88000u64,
    0xbd3fb554647678d1u64,
    0x3fa8f135b8108000u64,
    0xbd0bb98afdf33295u64,
    0x3fa8324c9b918000u64,
    0xbd3a1c40753a869fu64,
    0x3fa77394c9d98000u64,
    0xbd3395510d1e3f81u64,
    0x3fa6b50e297b0000u64,
    0xbcf98fd2dca61c14u64,
    0x3fa5f6b8a11c0000u64,
    0x3d3e308e31517b71u64,
    0x3fa5389417768000u64,
    0x3d380ee01b5122cfu64,
    0x3fa47aa073578000u64,
    0xbd1f61a96b8ce776u64,
    0x3fa3bcdd9b9f0000u64,
    0x3cde66be73b9da04u64,
    0x3fa2ff4b77410000u64,
    0x3d3ee54781c547e6u64,
    0x3fa241e9ed458000u64,
    0xbd3cbebea25ecd9eu64,
    0x3fa184b8e4c58000u64,
    0xbd2507d6dc1f27efu64,
    0x3fa0c7b844ef0000u64,
    0x3d2794d4c6c8f327u64,
    0x3fa00ae7f5030000u64,
    0xbd3f1e32799da52du64,
    0x3f9e9c8fb8a80000u64,
    0xbd35c01818adf4afu64,
    0x3f9d23afc4910000u64,
    0x3d2cfc4de6d73deau64,
    0x3f9bab2fdcb40000u64,
    0x3d3bb1b36bd0573fu64,
    0x3f9a330fd0290000u64,
    0xbd0142b08bb672e8u64,
    0x3f98bb4f6e2c0000u64,
    0xbd2564fcfaea5fb3u64,
    0x3f9743ee861f0000u64,
    0x3d2aab1b2a41b090u64,
    0x3f95ccece78a0000u64,
    0x3d32a788f82194cbu64,
    0x3f94564a62190000u64,
    0x3d241a2f220ccf53u64,
    0x3f92e006c59d0000u64,
    0xbd38f5d37680fd7cu64,
    0x3f916a21e20a0000u64,
    0x3d048a179268271du64,
    0x3f8fe9370ef60000u64,
    0x3d31c356e92c1dadu64,
    0x3f8cfee70c5c0000u64,
    0x3d3cbb8d7240b4e8u64,
    0x3f8a15535d0c0000u64,
    0xbd25330d5605f2a6u64,
    0x3f872c7ba2100000u64,
    0xbd319b14945cf6bau64,
    0x3f84445f7cbc0000u64,
    0x3d31fa3cf38106dbu64,
    0x3f815cfe8eae0000u64,
    0x3d3906028ac00d0fu64,
    0x3f7cecb0f3940000u64,
    0xbd3df6e958e938b0u64,
    0x3f7720d9c06c0000u64,
    0xbd37ca15910e7069u64,
    0x3f715676c8c80000u64,
    0xbd15cfd00d77e6ecu64,
    0x3f671b0ea4300000u64,
    0xbd2a025d9e2442e6u64,
    0x3f57182a89500000u64,
    0xbd3258e9a821b7ccu64,
    0x0000000000000000u64,
    0x0000000000000000u64,
];

// 2^(j/256) for j in 0..256, stored as (tail, hi) pairs: 2^(j/256) = hi * (1 + tail).
pub(super) const POW_EXP2_TAB_U64: [u64; 512] = [
    0x0000000000000000u64,
    0x3ff0000000000000u64,
    0xbc84e82fc61851acu64,
    0x3ff00b1afa5abcbfu64,
    0x3c9b3b4f1a88bf6eu64,
    0x3ff0163da9fb3335u64,
    0xbc82985dd8521d32u64,
    0x3ff02168143b0281u64,
    0xbc7160139cd8dc5du64,
    0x3ff02c9a3e778061u64,
    0x3c651e617061bfbdu64,
    0x3ff037d42e11bbccu64,
    0xbc905e7a108766d1u64,
    0x3ff04315e86e7f85u64,
    0x3c845fad437fa426u64,
    0x3ff04e5f72f654b1u64,
    0x3c8cd2523567f613u64,
    0x3ff059b0d3158574u64,
    0xbc954529642b232fu64,
    0x3ff0650a0e3c1f89u64,
    0xbc8bce8023f98efau64,
    0x3ff0706b29ddf6deu64,
    0x3c8293708ef5c32eu64,
    0x3ff07bd42b72a836u64,
    0x3c60f74e61e6c861u64,
    0x3ff0874518759bc8u64,
    0xbc95b9280905b2a4u64,
    0x3ff092bdf66607e0u64,
    0x3c90a3e45b33d399u64,
    0x3ff09e3ecac6f383u64,
    0x3c84f31f32c4b7e7u64,
    0x3ff0a9c79b1f3919u64,
    0x3c979aa65d837b6du64,
    0x3ff0b5586cf9890fu64,
    0x3c9407fb30d06420u64,
    0x3ff0c0f145e46c85u64,
    0x3c8eb51a92fdeffcu64,
    0x3ff0cc922b7247f7u64,
    0xbc9a5d04b3b9911bu64,
    0x3ff0d83b23395decu64,
    0x3c3ebe3d702f9cd1u64,
    0x3ff0e3ec32d3d1a2u64,
    0xbc937a01f0739546u64,
    0x3ff0efa55fdfa9c5u64,
    0xbc6a033489906e0bu64,
    0x3ff0fb66affed31bu64,
    0x3c8b8268b04ef0a5u64,
    0x3ff1073028d7233eu64,
    0xbc9556522a2fbd0eu64,
    0x3ff11301d0125b51u64,
    0xbc9ac46e44a2ebccu64,
    0x3ff11edbab5e2ab6u64,
    0xbc5080ef8c4eea55u64,
    0x3ff12abdc06c31ccu64,
    0xbc65704e90c9f860u64,
    0x3ff136a814f204abu64,
    0xbc91c923b9d5f416u64,
    0x3ff1429aaea92de0u64,
    0xbc897cea57e46280u64,
    0x3ff14e95934f312eu64,
    0x3c80d3e3e95c55afu64,
    0x3ff15a98c8a58e51u64,
    0x3c56f01429e2b9d2u64,
    0x3ff166a45471c3c2u64,
    0xbc801b15eaa59348u64,
    0x3ff172b83c7d517bu64,
    0x3c6e653b2459034bu64,
    0x3ff17ed48695bbc0u64,
    0xbc8f1ff055de323du64,
    0x3ff18af9388c8deau64,
    0x3c92cc7ea345b7dcu64,
    0x3ff1972658375d2fu64,
    0x3c8b898c3f1353bfu64,
    0x3ff1a35beb6fcb75u64,
    0x3c957bfb2876ea9eu64,
    0x3ff1af99f8138a1cu64,
    0xbc96d99c7611eb26u64,
    0x3ff1bbe084045cd4u64,
    0x3c8cdc1873af2155u64,
    0x3ff1c82f95281c6bu64,
    0x3c9aecf73e3a2f60u64,
    0x3ff1d4873168b9aau64,
    0xbc9493684653a131u64,
    0x3ff1e0e75eb44027u64,
    0xbc8fe782cb86389du64,
    0x3ff1ed5022fcd91du64,
    0xbc98e2899077520au64,
    0x3ff1f9c18438ce4du64,
    0x3c8a6f4144a6c38du64,
    0x3ff2063b88628cd6u64,
    0x3c9120fcd4f59273u64,
    0x3ff212be3578a819u64,
    0x3c807a05b0e4047du64,
    0x3ff21f49917ddc96u64,
    0x3c89b788c188c9b8u64,
    0x3ff22bdda27912d1u64,
    0x3c968efde3a8a894u64,
    0x3ff2387a6e756238u64,
    0x3c877afbca90ef84u64,
    0x3ff2451ffb82140au64,
    0x3c875e18f274487du64,
    0x3ff251ce4fb2a63fu64,
    0x3c91512f082876eeu64,
    0x3ff25e85711ece75u64,
    0x3c80472b981fe7f2u64,
    0x3ff26b4565e27cddu64,
    0x3c9a02f0c7d75ec6u64,
    0x3ff2780e341ddf29u64,
    0xbc96b87b3f71085eu64,
    0x3ff284dfe1f56381u64,
    0xbc803297e78260bfu64,
    0x3ff291ba7591bb70u64,
    0x3c82f7e16d09ab31u64,
    0x3ff29e9df51fdee1u64,
    0xbc95b77e5ccd9fbfu64,
    0x3ff2ab8a66d10f13u64,
    0xbc3d219b1a6fbffau64,
    0x3ff2b87fd0dad990u64,
    0xbc91e75c40b4251eu64,
    0x3ff2c57e39771b2fu64,
    0x3c8b3782720c0ab4u64,
    0x3ff2d285a6e4030bu64,
    0x3c98a911f1f7785au64,
    0x3ff2df961f641589u64,
    0x3c6e149289cecb8fu64,
    0x3ff2ecafa93e2f56u64,
    0xbc61e7c998db7dbbu64,
    0x3ff2f9d24abd886bu64,
    0x3c834d754db0abb6u64,
    0x3ff306fe0a31b715u64,
    0x3c85425c11faadf4u64,
    0x3ff31432edeeb2fdu64,
    0x3c864201e2ac744cu64,
    0x3ff32170fc4cd831u64,
    0xbc979517a03e2847u64,
    0x3ff32eb83ba8ea32u64,
    0x3c8fdd395dd3f84au64,
    0x3ff33c08b26416ffu64,
    0xbc800e2a46da4beeu64,
    0x3ff3496266e3fa2du64,
    0xbc86a3803b8e5b04u64,
    0x3ff356c55f929ff1u64,
    0xbc87430803972b34u64,
    0x3ff36431a2de883bu64,
    0xbc924aedcc4b5068u64,
    0x3ff371a7373aa9cbu64,
    0xbc954de30ae02d94u64,
    0x3ff37f26231e754au64,
    0xbc9907f81b512d8eu64,
    0x3ff38cae6d05d866u64,
    0xbc94f2487e1c03ecu64,
    0x3ff39a401b7140efu64,
    0xbc71d1e83e9436d2u64,
    0x3ff3a7db34e59ff7u64,
    0x3c914a5432fcb2f4u64,
    0x3ff3b57fbfec6cf4u64,
    0xbc991919b3ce1b15u64,
    0x3ff3c32dc313a8e5u64,
    0x3c79c3bba5562a2fu64,
    0x3ff3d0e544ede173u64,
    0x3c859f48a72a4c6du64,
    0x3ff3dea64c123422u64,
    0xbc85a71612e21658u64,
    0x3ff3ec70df1c5175u64,
    0xbc9312607a28698au64,
    0x3ff3fa4504ac801cu64,
    0x3c86421f6f1d24d6u64,
    0x3ff40822c367a024u64,
    0xbc58a78f4817895bu64,
    0x3ff4160a21f72e2au64,
    0xbc9348a6815fce65u64,
    0x3ff423fb2709468au64,
    0xbc7c2c9b67499a1bu64,
    0x3ff431f5d950a897u64,
    0x3c835c43984d9871u64,
    0x3ff43ffa3f84b9d4u64,
    0x3c4363ed60c2ac11u64,
    0x3ff44e086061892du64,
    0xbc632afc8d9473a0u64,
    0x3ff45c2042a7d232u64,
    0x3c9666093b0664efu64,
    0x3ff46a41ed1d0057u64,
    0xbc95fc5e44de020eu64,
    0x3ff4786d668b3237u64,
    0x3c6ecce1daa10379u64,
    0x3ff486a2b5c13cd0u64,
    0xbc7ea0148327c42fu64,
    0x3ff494e1e192aed2u64,
    0x3c93ff8e3f0f1230u64,
    0x3ff4a32af0d7d3deu64,
    0xbc7a843ad1a88022u64,
    0x3ff4b17dea6db7d7u64,
    0x3c7690cebb7aafb0u64,
    0x3ff4bfdad5362a27u64,
    0x3c892ca3bf144e63u64,
    0x3ff4ce41b817c114u64,
    0x3c931dbdeb54e077u64,
    0x3ff4dcb299fddd0du64,
    0xbc902c99b04aa8b0u64,
    0x3ff4eb2d81d8abffu64,
    0xbc8f94340071a38eu64,
    0x3ff4f9b2769d2ca7u64,
    0x3c73e34f67e67118u64,
    0x3ff508417f4531eeu64,
    0xbc87deccdc93a349u64,
    0x3ff516daa2cf6642u64,
    0xbc75a3b1197ba0f0u64,
    0x3ff5257de83f4eefu64,
    0xbc78dec6bd0f385fu64,
    0x3ff5342b569d4f82u64,
    0x3c81bd2888075068u64,
    0x3ff542e2f4f6ad27u64,
    0xbc861246ec7b5cf6u64,
    0x3ff551a4ca5d920fu64,
    0xbc896be8ae89ef8fu64,
    0x3ff56070dde910d2u64,
    0x3c93350518fdd78eu64,
    0x3ff56f4736b527dau64,
    0xbc88e6ac90348602u64,
    0x3ff57e27dbe2c4cfu64,
    0x3c7b98b72f8a9b05u64,
    0x3ff58d12d497c7fdu64,
    0xbc91af7f1365c3acu64,
    0x3ff59c0827ff07ccu64,
    0x3c9063e1e21c5409u64,
    0x3ff5ab07dd485429u64,
    0xbc943a3540d1898au64,
    0x3ff5ba11fba87a03u64,
    0x3c34c7855019c6eau64,
    0x3ff5c9268a5946b7u64,
    0xbc951f58ddaa8090u64,
    0x3ff5d84590998b93u64,
    0x3c9432e62b64c035u64,
    0x3ff5e76f15ad2148u64,
    0xbc82e1648e50a17cu64,
    0x3ff5f6a320dceb71u64,
    0xbc8ce44a6199769fu64,
    0x3ff605e1b976dc09u64,
    0x3c95f30eda98a575u64,
    0x3ff6152ae6cdf6f4u64,
    0xbc8c33c53bef4da8u64,
    0x3ff6247eb03a5585u64,
    0x3c917ecda8a72159u64,
    0x3ff633dd1d1929fdu64,
    0xbc845378892be9aeu64,
    0x3ff6434634ccc320u64,
    0xbc9345f3cee1ae6eu64,
    0x3ff652b9febc8fb7u64,
    0xbc93cedd78565858u64,
    0x3ff6623882552225u64,
    0xbc85c33fdf910406u64,
    0x3ff671c1c70833f6u64,
    0x3c5710aa807e1964u64,
    0x3ff68155d44ca973u64,
    0x3c81079ab5789604u64,
    0x3ff690f4b19e9538u64,
    0xbc93b3efbf5e2228u64,
    0x3ff6a09e667f3bcdu64,
    0x3c727df161cd7778u64,
    0x3ff6b052fa75173eu64,
    0xbc6a12ad8734b982u64,
    0x3ff6c012750bdabfu64,
    0x3c93f9924a05b767u64,
    0x3ff6cfdcddd47645u64,
    0xbc6367efb86da9eeu64,
    0x3ff6dfb23c651a2fu64,
    0xbc87557939a8b5efu64,
    0x3ff6ef9298593ae5u64,
    0xbc80dc3d54e08851u64,
    0x3ff6ff7df9519484u64,
    0x3c51ed2f56fa9d1au64,
    0x3ff70f7466f42e87u64,
    0xbc781f647e5a3ecfu64,
    0x3ff71f75e8ec5f74u64,
    0xbc88e67a9006c909u64,
    0x3ff72f8286ead08au64,
    0xbc86ee4ac08b7db0u64,
    0x3ff73f9a48a58174u64,
    0x3c86597566977ac8u64,
    0x3ff74fbd35d7cbfdu64,
    0xbc8619321e55e68au64,
    0x3ff75feb564267c9u64,
    0x3c92c0b7028a5c3au64,
    0x3ff77024b1ab6e09u64,
    0x3c909ccb5e09d4d3u64,
    0x3ff780694fde5d3fu64,
    0x3c8a30faf49cc78cu64,
    0x3ff790b938ac1cf6u64,
    0xbc7b32dcb94da51du64,
    0x3ff7a11473eb0187u64,
    0xbc92dad3519d7b5bu64,
    0x3ff7b17b0976cfdbu64,
    0x3c94ecfd5467c06bu64,
    0x3ff7c1ed0130c132u64,
    0x3c87d51410fd15c2u64,
    0x3ff7d26a62ff86f0u64,
    0x3c65ebe1abd66c55u64,
    0x3ff7e2f336cf4e62u64,
    0xbc760a3629969871u64,
    0x3ff7f3878491c491u64,
    0xbc88a1c52fb3cf42u64,
    0x3ff80427543e1a12u64,
    0x3c8b18c6e3fdef5du64,
    0x3ff814d2add106d9u64,
    0xbc9369b6f13b3734u64,
    0x3ff82589994cce13u64,
    0x3c90ec1ddcb1390au64,
    0x3ff8364c1eb941f7u64,
    0xbc805e843a19ff1eu64,
    0x3ff8471a4623c7adu64,
    0xbc522cea4f3afa1eu64,
    0x3ff857f4179f5b21u64,
    0xbc94d450d872576eu64,
    0x3ff868d99b4492edu64,
    0x3c7c88549b958471u64,
    0x3ff879cad931a436u64,
    0x3c90ad675b0e8a00u64,
    0x3ff88ac7d98a6699u64,
    0x3c931143962f7877u64,
    0x3ff89bd0a478580fu64,
    0x3c8db72fc1f0eab4u64,
    0x3ff8ace5422aa0dbu64,
    0x3c93e9e96f112479u64,
    0x3ff8be05bad61778u64,
    0xbc65b6609cc5e7ffu64,
    0x3ff8cf3216b5448cu64,
    0xbc8dac42a4a38df0u64,
    0x3ff8e06a5e0866d9u64,
    0x3c7bf68359f35f44u64,
    0x3ff8f1ae99157736u64,
    0x3c8b99dd98b1ed84u64,
    0x3ff902fed0282c8au64,
    0xbc93091fa71e3d83u64,
    0x3ff9145b0b91ffc6u64,
    0xbc7885ad50cbb750u64,
    0x3ff925c353aa2fe2u64,
    0xbc5da9b88b6c1e29u64,
    0x3ff93737b0cdc5e5u64,
    0xbc82d5e85f3e0301u64,
    0x3ff948b82b5f98e5u64,
    0xbc6c23f97c90b959u64,
    0x3ff95a44cbc8520fu64,
    0xbc51669428996971u64,
    0x3ff96bdd9a7670b3u64,
    0xbc92434322f4f9aau64,
    0x3ff97d829fde4e50u64,
    0x3c71f2b2c1c4c014u64,
    0x3ff98f33e47a22a2u64,
    0xbc85ca6cd7668e4bu64,
    0x3ff9a0f170ca07bau64,
    0xbc9294f304f166b6u64,
    0x3ff9b2bb4d53fe0du64,
    0x3c71affc2b91ce27u64,
    0x3ff9c49182a3f090u64,
    0xbc8a1e58414c07d3u64,
    0x3ff9d674194bb8d5u64,
    0x3c6dd235e10a73bbu64,
    0x3ff9e86319e32323u64,
    0xbc79740b58a20091u64,
    0x3ff9fa5e8d07f29eu64,
    0xbc87c50422622263u64,
    0x3ffa0c667b5de565u64,
    0x3c9165830a2b96c2u64,
    0x3ffa1e7aed8eb8bbu64,
    0x3c8b1c86e3e231d5u64,
    0x3ffa309bec4a2d33u64,
    0xbc903d5cbe27874bu64,
    0x3ffa42c980460ad8u64,
    0xbc91bbd1d3bcbb15u64,
    0x3ffa5503b23e255du64,
    0x3c5986178980fce0u64,
    0x3ffa674a8af46052u64,
    0x3c90cc319cee31d2u64,
    0x3ffa799e1330b358u64,
    0xbc89472975b1f2a5u64,
    0x3ffa8bfe53c12e59u64,
    0x3c8469846e735ab3u64,
    0x3ffa9e6b5579fdbfu64,
    0x3c7d8157a34b7e7fu64,
    0x3ffab0e521356ebau64,
    0xbc82dfcd978e9db4u64,
    0x3ffac36bbfd3f37au64,
    0x3c8c8a4e231ebb7du64,
    0x3ffad5ff3a3c2774u64,
    0x3c8c1a7792cb3387u64,
    0x3ffae89f995ad3adu64,
    0xbc888c8d11a142e5u64,
    0x3ffafb4ce622f2ffu64,
    0xbc907b8f4ad1d9fau64,
    0x3ffb0e07298db666u64,
    0x3c889c2ea41433c7u64,
    0x3ffb20ce6c9a8952u64,
    0xbc55c3d956dcaebau64,
    0x3ffb33a2b84f15fbu64,
    0xbc7274aedac8ff80u64,
    0x3ffb468415b749b1u64,
    0xbc90a40e3da6f640u64,
    0x3ffb59728de5593au64,
    0x3c85c620ce76df06u64,
    0x3ffb6c6e29f1c52au64,
    0xbc68d6f438ad9334u64,
    0x3ffb7f76f2fb5e47u64,
    0xbc8fda52e1b51e41u64,
    0x3ffb928cf22749e4u64,
    0xbc91eee26b588a35u64,
    0x3ffba5b030a1064au64,
    0xbc32141a7b3e2cd8u64,
    0x3ffbb8e0b79a6f1fu64,
    0x3c74ffd70a5fddcdu64,
    0x3ffbcc1e904bc1d2u64,
    0xbc302899507554e5u64,
    0x3ffbdf69c3f3a207u64,
    0xbc91bdfbfa9298acu64,
    0x3ffbf2c25bd71e09u64,
    0xbc80dda2d4c0010cu64,
    0x3ffc06286141b33du64,
    0x3c736eae30af0cb3u64,
    0x3ffc199bdd85529cu64,
    0xbc8a007daadf8d68u64,
    0x3ffc2d1cd9fa652cu64,
    0x3c8ee3325c9ffd94u64,
    0x3ffc40ab5fffd07au64,
    0x3c836909391181d3u64,
    0x3ffc544778fafb22u64,
    0x3c84e08fd10959acu64,
    0x3ffc67f12e57d14bu64,
    0xbc811cd7dbdf9547u64,
    0x3ffc7ba88988c933u64,
    0x3c63cdaf384e1a67u64,
    0x3ffc8f6d9406e7b5u64,
    0xbc7ac28b7bef6621u64,
    0x3ffca3405751c4dbu64,
    0x3c676b2c6c921968u64,
    0x3ffcb720dcef9069u64,
    0xbc7030587207b9e1u64,
    0x3ffccb0f2e6d1675u64,
    0xbc808a1883ccb5d2u64,
    0x3ffcdf0b555dc3fau64,
    0xbc8cc734592af7fcu64,
    0x3ffcf3155b5bab74u64,
    0xbc8fad5d3ffffa6fu64,
    0x3ffd072d4a07897cu64,
    0x3c87752a44f587e8u64,
    0x3ffd1b532b08c968u64,
    0xbc900dae3875a949u64,
    0x3ffd2f87080d89f2u64,
    0x3c85b66fefeef52eu64,
    0x3ffd43c8eacaa1d6u64,
    0x3c74a385a63d07a7u64,
    0x3ffd5818dcfba487u64,
    0x3c5159d9d908a96eu64,
    0x3ffd6c76e862e6d3u64,
    0xbc82919e2040220fu64,
    0x3ffd80e316c98398u64,
    0x3c8c254d16117a68u64,
    0x3ffd955d71ff6075u64,
    0x3c8e5a50d5c192acu64,
    0x3ffda9e603db3285u64,
    0xbc8d8c329fbd0e03u64,
    0x3ffdbe7cd63a8315u64,
    0x3c843a59ac016b4bu64,
    0x3ffdd321f301b460u64,
    0xbc8ea6e6fbd5f2a6u64,
    0x3ffde7d5641c0658u64,
    0xbc82d52107b43e1fu64,
    0x3ffdfc97337b9b5fu64,
    0xbc63e8e3eab2cbb4u64,
    0x3ffe11676b197d17u64,
    0xbc892ab93b470dc9u64,
    0x3ffe264614f5a129u64,
    0xbc8b7966cd0d2cd9u64,
    0x3ffe3b333b16ee12u64,
    0x3c74b604603a88d3u64,
    0x3ffe502ee78b3ff6u64,
    0xbc776caa4c2ff1cfu64,
    0x3ffe653924676d76u64,
    0x3c83c5ec519d7271u64,
    0x3ffe7a51fbc74c83u64,
    0xbc81d5fc525d9940u64,
    0x3ffe8f7977cdb740u64,
    0xbc8ff7128fd391f0u64,
    0x3ffea4afa2a490dau64,
    0x3c855cd8aaea3d21u64,
    0x3ffeb9f4867cca6eu64,
    0xbc8dae98e223747du64,
    0x3ffecf482d8e67f1u64,
    0x3c8269947c2bed4au64,
    0x3ffee4aaa2188510u64,
    0x3c8ec3bc41aa2008u64,
    0x3ffefa1bee615a27u64,
    0xbc83b6137e9afe9eu64,
    0x3fff0f9c1cb6412au64,
    0x3c842b94c3a9eb32u64,
    0x3fff252b376bba97u64,
    0xbc69fa74878ba7c7u64,
    0x3fff3ac948dd7274u64,
    0x3c8a64a931d185eeu64,
    0x3fff50765b6e4540u64,
    0x3c901f3a75ee0efeu64,
    0x3fff6632798844f8u64,
    0xbc8e37bae43be3edu64,
    0x3fff7bfdad9cbe14u64,
    0xbc516a9ce6ed84fau64,
    0x3fff91d802243c89u64,
    0x3c77893b4d91cd9du64,
    0x3fffa7c1819e90d8u64,
    0xbc699c7db2effc76u64,
    0x3fffbdba3692d514u64,
    0x3c5305c14160cc89u64,
    0x3fffd3c22b8f71f1u64,
    0x3c64b458677f9840u64,
    0x3fffe9d96b2a23d9u64,
];
