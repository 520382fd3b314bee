/// Fixed tables shared by the encoder and decoder.
///
/// Windows and transform matrices are Q15, centroids Q12, inverse step
/// sizes Q13. Huffman code/width tables are paired with decode trees in
/// which a non-positive entry is a leaf (negate to recover the symbol)
/// and a positive entry is the next node index.

/// Sine analysis/synthesis window for the 320-point transform, Q15.
pub const MLT_WINDOW_320: [i16; 640] = [
        80,    241,    402,    563,    724,    885,   1045,   1206,   1367,   1528,
      1688,   1849,   2009,   2170,   2330,   2491,   2651,   2811,   2972,   3132,
      3292,   3452,   3612,   3772,   3931,   4091,   4251,   4410,   4569,   4728,
      4888,   5047,   5205,   5364,   5523,   5681,   5840,   5998,   6156,   6314,
      6472,   6629,   6787,   6944,   7101,   7258,   7415,   7571,   7728,   7884,
      8040,   8196,   8351,   8507,   8662,   8817,   8972,   9127,   9281,   9435,
      9589,   9743,   9896,  10049,  10202,  10355,  10508,  10660,  10812,  10963,
     11115,  11266,  11417,  11568,  11718,  11868,  12018,  12167,  12317,  12465,
     12614,  12762,  12910,  13058,  13205,  13352,  13499,  13646,  13792,  13937,
     14083,  14228,  14373,  14517,  14661,  14805,  14948,  15091,  15234,  15376,
     15518,  15659,  15800,  15941,  16081,  16221,  16361,  16500,  16639,  16777,
     16915,  17053,  17190,  17326,  17463,  17599,  17734,  17869,  18004,  18138,
     18272,  18405,  18538,  18670,  18802,  18934,  19065,  19195,  19326,  19455,
     19584,  19713,  19841,  19969,  20096,  20223,  20350,  20475,  20601,  20726,
     20850,  20974,  21097,  21220,  21342,  21464,  21585,  21706,  21826,  21946,
     22065,  22184,  22302,  22420,  22537,  22653,  22769,  22884,  22999,  23114,
     23227,  23340,  23453,  23565,  23677,  23788,  23898,  24008,  24117,  24225,
     24333,  24441,  24548,  24654,  24760,  24865,  24969,  25073,  25176,  25279,
     25381,  25482,  25583,  25683,  25783,  25882,  25980,  26078,  26175,  26272,
     26367,  26463,  26557,  26651,  26744,  26837,  26929,  27020,  27111,  27201,
     27290,  27379,  27467,  27554,  27641,  27727,  27812,  27897,  27981,  28065,
     28147,  28229,  28311,  28391,  28471,  28551,  28629,  28707,  28784,  28861,
     28937,  29012,  29086,  29160,  29233,  29305,  29377,  29448,  29518,  29587,
     29656,  29724,  29792,  29858,  29924,  29989,  30054,  30118,  30181,  30243,
     30304,  30365,  30425,  30485,  30543,  30601,  30658,  30715,  30770,  30825,
     30880,  30933,  30986,  31038,  31089,  31139,  31189,  31238,  31286,  31334,
     31380,  31426,  31471,  31516,  31559,  31602,  31645,  31686,  31726,  31766,
     31805,  31844,  31881,  31918,  31954,  31989,  32024,  32058,  32090,  32123,
     32154,  32185,  32214,  32243,  32272,  32299,  32326,  32352,  32377,  32401,
     32425,  32448,  32470,  32491,  32512,  32531,  32550,  32568,  32586,  32602,
     32618,  32633,  32647,  32661,  32673,  32685,  32696,  32706,  32716,  32724,
     32732,  32739,  32746,  32751,  32756,  32760,  32763,  32766,  32767,  32767,
     32767,  32767,  32766,  32763,  32760,  32756,  32751,  32746,  32739,  32732,
     32724,  32716,  32706,  32696,  32685,  32673,  32661,  32647,  32633,  32618,
     32602,  32586,  32568,  32550,  32531,  32512,  32491,  32470,  32448,  32425,
     32401,  32377,  32352,  32326,  32299,  32272,  32243,  32214,  32185,  32154,
     32123,  32090,  32058,  32024,  31989,  31954,  31918,  31881,  31844,  31805,
     31766,  31726,  31686,  31645,  31602,  31559,  31516,  31471,  31426,  31380,
     31334,  31286,  31238,  31189,  31139,  31089,  31038,  30986,  30933,  30880,
     30825,  30770,  30715,  30658,  30601,  30543,  30485,  30425,  30365,  30304,
     30243,  30181,  30118,  30054,  29989,  29924,  29858,  29792,  29724,  29656,
     29587,  29518,  29448,  29377,  29305,  29233,  29160,  29086,  29012,  28937,
     28861,  28784,  28707,  28629,  28551,  28471,  28391,  28311,  28229,  28147,
     28065,  27981,  27897,  27812,  27727,  27641,  27554,  27467,  27379,  27290,
     27201,  27111,  27020,  26929,  26837,  26744,  26651,  26557,  26463,  26367,
     26272,  26175,  26078,  25980,  25882,  25783,  25683,  25583,  25482,  25381,
     25279,  25176,  25073,  24969,  24865,  24760,  24654,  24548,  24441,  24333,
     24225,  24117,  24008,  23898,  23788,  23677,  23565,  23453,  23340,  23227,
     23114,  22999,  22884,  22769,  22653,  22537,  22420,  22302,  22184,  22065,
     21946,  21826,  21706,  21585,  21464,  21342,  21220,  21097,  20974,  20850,
     20726,  20601,  20475,  20350,  20223,  20096,  19969,  19841,  19713,  19584,
     19455,  19326,  19195,  19065,  18934,  18802,  18670,  18538,  18405,  18272,
     18138,  18004,  17869,  17734,  17599,  17463,  17326,  17190,  17053,  16915,
     16777,  16639,  16500,  16361,  16221,  16081,  15941,  15800,  15659,  15518,
     15376,  15234,  15091,  14948,  14805,  14661,  14517,  14373,  14228,  14083,
     13937,  13792,  13646,  13499,  13352,  13205,  13058,  12910,  12762,  12614,
     12465,  12317,  12167,  12018,  11868,  11718,  11568,  11417,  11266,  11115,
     10963,  10812,  10660,  10508,  10355,  10202,  10049,   9896,   9743,   9589,
      9435,   9281,   9127,   8972,   8817,   8662,   8507,   8351,   8196,   8040,
      7884,   7728,   7571,   7415,   7258,   7101,   6944,   6787,   6629,   6472,
      6314,   6156,   5998,   5840,   5681,   5523,   5364,   5205,   5047,   4888,
      4728,   4569,   4410,   4251,   4091,   3931,   3772,   3612,   3452,   3292,
      3132,   2972,   2811,   2651,   2491,   2330,   2170,   2009,   1849,   1688,
      1528,   1367,   1206,   1045,    885,    724,    563,    402,    241,     80,
];

/// Sine analysis/synthesis window for the 640-point transform, Q15.
pub const MLT_WINDOW_640: [i16; 1280] = [
        40,    121,    201,    281,    362,    442,    523,    603,    684,    764,
       844,    925,   1005,   1086,   1166,   1246,   1327,   1407,   1487,   1568,
      1648,   1728,   1809,   1889,   1969,   2049,   2130,   2210,   2290,   2370,
      2451,   2531,   2611,   2691,   2771,   2851,   2932,   3012,   3092,   3172,
      3252,   3332,   3412,   3492,   3572,   3652,   3732,   3812,   3891,   3971,
      4051,   4131,   4211,   4290,   4370,   4450,   4529,   4609,   4689,   4768,
      4848,   4927,   5007,   5086,   5166,   5245,   5325,   5404,   5483,   5562,
      5642,   5721,   5800,   5879,   5958,   6037,   6116,   6195,   6274,   6353,
      6432,   6511,   6590,   6669,   6747,   6826,   6905,   6983,   7062,   7140,
      7219,   7297,   7376,   7454,   7532,   7610,   7689,   7767,   7845,   7923,
      8001,   8079,   8157,   8235,   8313,   8390,   8468,   8546,   8623,   8701,
      8778,   8856,   8933,   9011,   9088,   9165,   9242,   9319,   9397,   9474,
      9551,   9627,   9704,   9781,   9858,   9934,  10011,  10088,  10164,  10241,
     10317,  10393,  10469,  10546,  10622,  10698,  10774,  10850,  10926,  11001,
     11077,  11153,  11228,  11304,  11379,  11455,  11530,  11605,  11680,  11756,
     11831,  11906,  11980,  12055,  12130,  12205,  12279,  12354,  12428,  12503,
     12577,  12651,  12725,  12799,  12873,  12947,  13021,  13095,  13169,  13242,
     13316,  13389,  13463,  13536,  13609,  13682,  13755,  13828,  13901,  13974,
     14046,  14119,  14192,  14264,  14336,  14409,  14481,  14553,  14625,  14697,
     14769,  14841,  14912,  14984,  15055,  15127,  15198,  15269,  15340,  15411,
     15482,  15553,  15624,  15694,  15765,  15835,  15906,  15976,  16046,  16116,
     16186,  16256,  16326,  16396,  16465,  16535,  16604,  16673,  16743,  16812,
     16881,  16949,  17018,  17087,  17156,  17224,  17292,  17361,  17429,  17497,
     17565,  17633,  17700,  17768,  17835,  17903,  17970,  18037,  18104,  18171,
     18238,  18305,  18372,  18438,  18505,  18571,  18637,  18703,  18769,  18835,
     18901,  18967,  19032,  19098,  19163,  19228,  19293,  19358,  19423,  19488,
     19552,  19617,  19681,  19745,  19809,  19873,  19937,  20001,  20065,  20128,
     20192,  20255,  20318,  20381,  20444,  20507,  20569,  20632,  20694,  20757,
     20819,  20881,  20943,  21005,  21066,  21128,  21189,  21251,  21312,  21373,
     21434,  21494,  21555,  21616,  21676,  21736,  21796,  21856,  21916,  21976,
     22035,  22095,  22154,  22213,  22272,  22331,  22390,  22449,  22507,  22566,
     22624,  22682,  22740,  22798,  22856,  22913,  22971,  23028,  23085,  23142,
     23199,  23256,  23312,  23369,  23425,  23481,  23537,  23593,  23649,  23704,
     23760,  23815,  23870,  23925,  23980,  24035,  24090,  24144,  24198,  24252,
     24306,  24360,  24414,  24468,  24521,  24574,  24627,  24680,  24733,  24786,
     24838,  24891,  24943,  24995,  25047,  25099,  25151,  25202,  25253,  25304,
     25355,  25406,  25457,  25508,  25558,  25608,  25658,  25708,  25758,  25808,
     25857,  25907,  25956,  26005,  26054,  26102,  26151,  26199,  26247,  26296,
     26343,  26391,  26439,  26486,  26533,  26581,  26628,  26674,  26721,  26767,
     26814,  26860,  26906,  26952,  26997,  27043,  27088,  27133,  27178,  27223,
     27268,  27312,  27357,  27401,  27445,  27489,  27533,  27576,  27619,  27663,
     27706,  27749,  27791,  27834,  27876,  27918,  27960,  28002,  28044,  28085,
     28127,  28168,  28209,  28250,  28290,  28331,  28371,  28411,  28451,  28491,
     28531,  28570,  28610,  28649,  28688,  28726,  28765,  28803,  28842,  28880,
     28918,  28955,  28993,  29030,  29068,  29105,  29142,  29178,  29215,  29251,
     29287,  29323,  29359,  29395,  29430,  29465,  29500,  29535,  29570,  29605,
     29639,  29673,  29707,  29741,  29775,  29808,  29842,  29875,  29908,  29941,
     29973,  30006,  30038,  30070,  30102,  30133,  30165,  30196,  30227,  30258,
     30289,  30320,  30350,  30380,  30410,  30440,  30470,  30499,  30529,  30558,
     30587,  30616,  30644,  30672,  30701,  30729,  30757,  30784,  30812,  30839,
     30866,  30893,  30920,  30946,  30973,  30999,  31025,  31050,  31076,  31102,
     31127,  31152,  31177,  31201,  31226,  31250,  31274,  31298,  31322,  31345,
     31369,  31392,  31415,  31438,  31460,  31483,  31505,  31527,  31549,  31570,
     31592,  31613,  31634,  31655,  31676,  31696,  31716,  31737,  31756,  31776,
     31796,  31815,  31834,  31853,  31872,  31891,  31909,  31927,  31945,  31963,
     31981,  31998,  32015,  32032,  32049,  32066,  32082,  32099,  32115,  32131,
     32146,  32162,  32177,  32192,  32207,  32222,  32236,  32251,  32265,  32279,
     32292,  32306,  32319,  32333,  32345,  32358,  32371,  32383,  32395,  32407,
     32419,  32431,  32442,  32453,  32464,  32475,  32486,  32496,  32507,  32517,
     32526,  32536,  32546,  32555,  32564,  32573,  32581,  32590,  32598,  32606,
     32614,  32622,  32629,  32637,  32644,  32651,  32657,  32664,  32670,  32676,
     32682,  32688,  32693,  32699,  32704,  32709,  32714,  32718,  32722,  32727,
     32730,  32734,  32738,  32741,  32744,  32747,  32750,  32753,  32755,  32757,
     32759,  32761,  32762,  32764,  32765,  32766,  32767,  32767,  32767,  32767,
     32767,  32767,  32767,  32767,  32766,  32765,  32764,  32762,  32761,  32759,
     32757,  32755,  32753,  32750,  32747,  32744,  32741,  32738,  32734,  32730,
     32727,  32722,  32718,  32714,  32709,  32704,  32699,  32693,  32688,  32682,
     32676,  32670,  32664,  32657,  32651,  32644,  32637,  32629,  32622,  32614,
     32606,  32598,  32590,  32581,  32573,  32564,  32555,  32546,  32536,  32526,
     32517,  32507,  32496,  32486,  32475,  32464,  32453,  32442,  32431,  32419,
     32407,  32395,  32383,  32371,  32358,  32345,  32333,  32319,  32306,  32292,
     32279,  32265,  32251,  32236,  32222,  32207,  32192,  32177,  32162,  32146,
     32131,  32115,  32099,  32082,  32066,  32049,  32032,  32015,  31998,  31981,
     31963,  31945,  31927,  31909,  31891,  31872,  31853,  31834,  31815,  31796,
     31776,  31756,  31737,  31716,  31696,  31676,  31655,  31634,  31613,  31592,
     31570,  31549,  31527,  31505,  31483,  31460,  31438,  31415,  31392,  31369,
     31345,  31322,  31298,  31274,  31250,  31226,  31201,  31177,  31152,  31127,
     31102,  31076,  31050,  31025,  30999,  30973,  30946,  30920,  30893,  30866,
     30839,  30812,  30784,  30757,  30729,  30701,  30672,  30644,  30616,  30587,
     30558,  30529,  30499,  30470,  30440,  30410,  30380,  30350,  30320,  30289,
     30258,  30227,  30196,  30165,  30133,  30102,  30070,  30038,  30006,  29973,
     29941,  29908,  29875,  29842,  29808,  29775,  29741,  29707,  29673,  29639,
     29605,  29570,  29535,  29500,  29465,  29430,  29395,  29359,  29323,  29287,
     29251,  29215,  29178,  29142,  29105,  29068,  29030,  28993,  28955,  28918,
     28880,  28842,  28803,  28765,  28726,  28688,  28649,  28610,  28570,  28531,
     28491,  28451,  28411,  28371,  28331,  28290,  28250,  28209,  28168,  28127,
     28085,  28044,  28002,  27960,  27918,  27876,  27834,  27791,  27749,  27706,
     27663,  27619,  27576,  27533,  27489,  27445,  27401,  27357,  27312,  27268,
     27223,  27178,  27133,  27088,  27043,  26997,  26952,  26906,  26860,  26814,
     26767,  26721,  26674,  26628,  26581,  26533,  26486,  26439,  26391,  26343,
     26296,  26247,  26199,  26151,  26102,  26054,  26005,  25956,  25907,  25857,
     25808,  25758,  25708,  25658,  25608,  25558,  25508,  25457,  25406,  25355,
     25304,  25253,  25202,  25151,  25099,  25047,  24995,  24943,  24891,  24838,
     24786,  24733,  24680,  24627,  24574,  24521,  24468,  24414,  24360,  24306,
     24252,  24198,  24144,  24090,  24035,  23980,  23925,  23870,  23815,  23760,
     23704,  23649,  23593,  23537,  23481,  23425,  23369,  23312,  23256,  23199,
     23142,  23085,  23028,  22971,  22913,  22856,  22798,  22740,  22682,  22624,
     22566,  22507,  22449,  22390,  22331,  22272,  22213,  22154,  22095,  22035,
     21976,  21916,  21856,  21796,  21736,  21676,  21616,  21555,  21494,  21434,
     21373,  21312,  21251,  21189,  21128,  21066,  21005,  20943,  20881,  20819,
     20757,  20694,  20632,  20569,  20507,  20444,  20381,  20318,  20255,  20192,
     20128,  20065,  20001,  19937,  19873,  19809,  19745,  19681,  19617,  19552,
     19488,  19423,  19358,  19293,  19228,  19163,  19098,  19032,  18967,  18901,
     18835,  18769,  18703,  18637,  18571,  18505,  18438,  18372,  18305,  18238,
     18171,  18104,  18037,  17970,  17903,  17835,  17768,  17700,  17633,  17565,
     17497,  17429,  17361,  17292,  17224,  17156,  17087,  17018,  16949,  16881,
     16812,  16743,  16673,  16604,  16535,  16465,  16396,  16326,  16256,  16186,
     16116,  16046,  15976,  15906,  15835,  15765,  15694,  15624,  15553,  15482,
     15411,  15340,  15269,  15198,  15127,  15055,  14984,  14912,  14841,  14769,
     14697,  14625,  14553,  14481,  14409,  14336,  14264,  14192,  14119,  14046,
     13974,  13901,  13828,  13755,  13682,  13609,  13536,  13463,  13389,  13316,
     13242,  13169,  13095,  13021,  12947,  12873,  12799,  12725,  12651,  12577,
     12503,  12428,  12354,  12279,  12205,  12130,  12055,  11980,  11906,  11831,
     11756,  11680,  11605,  11530,  11455,  11379,  11304,  11228,  11153,  11077,
     11001,  10926,  10850,  10774,  10698,  10622,  10546,  10469,  10393,  10317,
     10241,  10164,  10088,  10011,   9934,   9858,   9781,   9704,   9627,   9551,
      9474,   9397,   9319,   9242,   9165,   9088,   9011,   8933,   8856,   8778,
      8701,   8623,   8546,   8468,   8390,   8313,   8235,   8157,   8079,   8001,
      7923,   7845,   7767,   7689,   7610,   7532,   7454,   7376,   7297,   7219,
      7140,   7062,   6983,   6905,   6826,   6747,   6669,   6590,   6511,   6432,
      6353,   6274,   6195,   6116,   6037,   5958,   5879,   5800,   5721,   5642,
      5562,   5483,   5404,   5325,   5245,   5166,   5086,   5007,   4927,   4848,
      4768,   4689,   4609,   4529,   4450,   4370,   4290,   4211,   4131,   4051,
      3971,   3891,   3812,   3732,   3652,   3572,   3492,   3412,   3332,   3252,
      3172,   3092,   3012,   2932,   2851,   2771,   2691,   2611,   2531,   2451,
      2370,   2290,   2210,   2130,   2049,   1969,   1889,   1809,   1728,   1648,
      1568,   1487,   1407,   1327,   1246,   1166,   1086,   1005,    925,    844,
       764,    684,    603,    523,    442,    362,    281,    201,    121,     40,
];

/// 10x10 cosine kernel for the transform core, Q15 with a half gain
/// folded in. Entry for output k, input j lives at k + j * 10.
pub const DCT_CORE_MATRIX: [i16; 100] = [
      7305,   7125,   6769,   6247,   5572,   4759,   3828,   2804,   1710,    575,
      7125,   5572,   2804,   -575,  -3828,  -6247,  -7305,  -6769,  -4759,  -1710,
      6769,   2804,  -2804,  -6769,  -6769,  -2804,   2804,   6769,   6769,   2804,
      6247,   -575,  -6769,  -5572,   1710,   7125,   4759,  -2804,  -7305,  -3828,
      5572,  -3828,  -6769,   1710,   7305,    575,  -7125,  -2804,   6247,   4759,
      4759,  -6247,  -2804,   7125,    575,  -7305,   1710,   6769,  -3828,  -5572,
      3828,  -7305,   2804,   4759,  -7125,   1710,   5572,  -6769,    575,   6247,
      2804,  -6769,   6769,  -2804,  -2804,   6769,  -6769,   2804,   2804,  -6769,
      1710,  -4759,   6769,  -7305,   6247,  -3828,    575,   2804,  -5572,   7125,
       575,  -1710,   2804,  -3828,   4759,  -5572,   6247,  -6769,   7125,  -7305,
];

/// Recombination rotations for span 20: interleaved (cos, sin) pairs, Q15.
pub const ROTATION_COS_SIN_20: [i16; 20] = [
     32743,   1286,  32541,   3851,  32138,   6393,  31538,   8895,  30743,  11342,
     29758,  13719,  28590,  16011,  27246,  18205,  25733,  20286,  24062,  22243,
];

/// Recombination rotations for span 40: interleaved (cos, sin) pairs, Q15.
pub const ROTATION_COS_SIN_40: [i16; 40] = [
     32762,    643,  32711,   1929,  32610,   3212,  32459,   4490,  32258,   5760,
     32007,   7022,  31706,   8274,  31357,   9512,  30959,  10736,  30514,  11943,
     30022,  13132,  29483,  14300,  28899,  15447,  28270,  16569,  27598,  17666,
     26883,  18736,  26127,  19777,  25330,  20788,  24494,  21766,  23621,  22711,
];

/// Recombination rotations for span 80: interleaved (cos, sin) pairs, Q15.
pub const ROTATION_COS_SIN_80: [i16; 80] = [
     32766,    322,  32754,    965,  32729,   1608,  32691,   2250,  32640,   2892,
     32577,   3532,  32501,   4171,  32413,   4808,  32313,   5444,  32200,   6077,
     32074,   6708,  31936,   7336,  31786,   7962,  31624,   8585,  31449,   9204,
     31262,   9819,  31063,  10431,  30853,  11039,  30630,  11643,  30395,  12242,
     30149,  12836,  29891,  13426,  29622,  14010,  29341,  14589,  29049,  15162,
     28746,  15730,  28431,  16291,  28106,  16846,  27770,  17395,  27423,  17937,
     27066,  18472,  26698,  18999,  26320,  19520,  25931,  20033,  25533,  20538,
     25125,  21035,  24707,  21525,  24279,  22006,  23843,  22478,  23397,  22942,
];

/// Recombination rotations for span 160: interleaved (cos, sin) pairs, Q15.
pub const ROTATION_COS_SIN_160: [i16; 160] = [
     32767,    161,  32764,    483,  32758,    804,  32749,   1126,  32736,   1447,
     32720,   1768,  32701,   2090,  32679,   2411,  32654,   2731,  32626,   3052,
     32594,   3372,  32559,   3692,  32522,   4011,  32481,   4330,  32437,   4649,
     32389,   4967,  32339,   5285,  32286,   5602,  32229,   5919,  32169,   6235,
     32107,   6550,  32041,   6865,  31972,   7180,  31900,   7493,  31825,   7806,
     31747,   8118,  31665,   8429,  31581,   8740,  31494,   9049,  31403,   9358,
     31310,   9666,  31214,   9973,  31114,  10279,  31012,  10584,  30906,  10888,
     30798,  11191,  30687,  11492,  30572,  11793,  30455,  12093,  30335,  12391,
     30212,  12688,  30086,  12984,  29957,  13279,  29825,  13572,  29690,  13865,
     29553,  14155,  29412,  14445,  29269,  14733,  29123,  15019,  28974,  15305,
     28823,  15588,  28668,  15871,  28511,  16151,  28351,  16430,  28188,  16708,
     28023,  16984,  27855,  17258,  27684,  17531,  27511,  17802,  27335,  18071,
     27156,  18338,  26975,  18604,  26791,  18868,  26604,  19130,  26415,  19390,
     26223,  19649,  26029,  19905,  25833,  20160,  25633,  20413,  25432,  20663,
     25228,  20912,  25021,  21159,  24812,  21403,  24601,  21646,  24387,  21886,
     24171,  22125,  23953,  22361,  23732,  22595,  23509,  22827,  23284,  23056,
];

/// Recombination rotations for span 320: interleaved (cos, sin) pairs, Q15.
pub const ROTATION_COS_SIN_320: [i16; 320] = [
     32767,     80,  32767,    241,  32766,    402,  32763,    563,  32760,    724,
     32756,    885,  32751,   1045,  32746,   1206,  32739,   1367,  32732,   1528,
     32724,   1688,  32716,   1849,  32706,   2009,  32696,   2170,  32685,   2330,
     32673,   2491,  32661,   2651,  32647,   2811,  32633,   2972,  32618,   3132,
     32602,   3292,  32586,   3452,  32568,   3612,  32550,   3772,  32531,   3931,
     32512,   4091,  32491,   4251,  32470,   4410,  32448,   4569,  32425,   4728,
     32401,   4888,  32377,   5047,  32352,   5205,  32326,   5364,  32299,   5523,
     32272,   5681,  32243,   5840,  32214,   5998,  32185,   6156,  32154,   6314,
     32123,   6472,  32090,   6629,  32058,   6787,  32024,   6944,  31989,   7101,
     31954,   7258,  31918,   7415,  31881,   7571,  31844,   7728,  31805,   7884,
     31766,   8040,  31726,   8196,  31686,   8351,  31645,   8507,  31602,   8662,
     31559,   8817,  31516,   8972,  31471,   9127,  31426,   9281,  31380,   9435,
     31334,   9589,  31286,   9743,  31238,   9896,  31189,  10049,  31139,  10202,
     31089,  10355,  31038,  10508,  30986,  10660,  30933,  10812,  30880,  10963,
     30825,  11115,  30770,  11266,  30715,  11417,  30658,  11568,  30601,  11718,
     30543,  11868,  30485,  12018,  30425,  12167,  30365,  12317,  30304,  12465,
     30243,  12614,  30181,  12762,  30118,  12910,  30054,  13058,  29989,  13205,
     29924,  13352,  29858,  13499,  29792,  13646,  29724,  13792,  29656,  13937,
     29587,  14083,  29518,  14228,  29448,  14373,  29377,  14517,  29305,  14661,
     29233,  14805,  29160,  14948,  29086,  15091,  29012,  15234,  28937,  15376,
     28861,  15518,  28784,  15659,  28707,  15800,  28629,  15941,  28551,  16081,
     28471,  16221,  28391,  16361,  28311,  16500,  28229,  16639,  28147,  16777,
     28065,  16915,  27981,  17053,  27897,  17190,  27812,  17326,  27727,  17463,
     27641,  17599,  27554,  17734,  27467,  17869,  27379,  18004,  27290,  18138,
     27201,  18272,  27111,  18405,  27020,  18538,  26929,  18670,  26837,  18802,
     26744,  18934,  26651,  19065,  26557,  19195,  26463,  19326,  26367,  19455,
     26272,  19584,  26175,  19713,  26078,  19841,  25980,  19969,  25882,  20096,
     25783,  20223,  25683,  20350,  25583,  20475,  25482,  20601,  25381,  20726,
     25279,  20850,  25176,  20974,  25073,  21097,  24969,  21220,  24865,  21342,
     24760,  21464,  24654,  21585,  24548,  21706,  24441,  21826,  24333,  21946,
     24225,  22065,  24117,  22184,  24008,  22302,  23898,  22420,  23788,  22537,
     23677,  22653,  23565,  22769,  23453,  22884,  23340,  22999,  23227,  23114,
];

/// Recombination rotations for span 640: interleaved (cos, sin) pairs, Q15.
pub const ROTATION_COS_SIN_640: [i16; 640] = [
     32767,     40,  32767,    121,  32767,    201,  32767,    281,  32766,    362,
     32765,    442,  32764,    523,  32762,    603,  32761,    684,  32759,    764,
     32757,    844,  32755,    925,  32753,   1005,  32750,   1086,  32747,   1166,
     32744,   1246,  32741,   1327,  32738,   1407,  32734,   1487,  32730,   1568,
     32727,   1648,  32722,   1728,  32718,   1809,  32714,   1889,  32709,   1969,
     32704,   2049,  32699,   2130,  32693,   2210,  32688,   2290,  32682,   2370,
     32676,   2451,  32670,   2531,  32664,   2611,  32657,   2691,  32651,   2771,
     32644,   2851,  32637,   2932,  32629,   3012,  32622,   3092,  32614,   3172,
     32606,   3252,  32598,   3332,  32590,   3412,  32581,   3492,  32573,   3572,
     32564,   3652,  32555,   3732,  32546,   3812,  32536,   3891,  32526,   3971,
     32517,   4051,  32507,   4131,  32496,   4211,  32486,   4290,  32475,   4370,
     32464,   4450,  32453,   4529,  32442,   4609,  32431,   4689,  32419,   4768,
     32407,   4848,  32395,   4927,  32383,   5007,  32371,   5086,  32358,   5166,
     32345,   5245,  32333,   5325,  32319,   5404,  32306,   5483,  32292,   5562,
     32279,   5642,  32265,   5721,  32251,   5800,  32236,   5879,  32222,   5958,
     32207,   6037,  32192,   6116,  32177,   6195,  32162,   6274,  32146,   6353,
     32131,   6432,  32115,   6511,  32099,   6590,  32082,   6669,  32066,   6747,
     32049,   6826,  32032,   6905,  32015,   6983,  31998,   7062,  31981,   7140,
     31963,   7219,  31945,   7297,  31927,   7376,  31909,   7454,  31891,   7532,
     31872,   7610,  31853,   7689,  31834,   7767,  31815,   7845,  31796,   7923,
     31776,   8001,  31756,   8079,  31737,   8157,  31716,   8235,  31696,   8313,
     31676,   8390,  31655,   8468,  31634,   8546,  31613,   8623,  31592,   8701,
     31570,   8778,  31549,   8856,  31527,   8933,  31505,   9011,  31483,   9088,
     31460,   9165,  31438,   9242,  31415,   9319,  31392,   9397,  31369,   9474,
     31345,   9551,  31322,   9627,  31298,   9704,  31274,   9781,  31250,   9858,
     31226,   9934,  31201,  10011,  31177,  10088,  31152,  10164,  31127,  10241,
     31102,  10317,  31076,  10393,  31050,  10469,  31025,  10546,  30999,  10622,
     30973,  10698,  30946,  10774,  30920,  10850,  30893,  10926,  30866,  11001,
     30839,  11077,  30812,  11153,  30784,  11228,  30757,  11304,  30729,  11379,
     30701,  11455,  30672,  11530,  30644,  11605,  30616,  11680,  30587,  11756,
     30558,  11831,  30529,  11906,  30499,  11980,  30470,  12055,  30440,  12130,
     30410,  12205,  30380,  12279,  30350,  12354,  30320,  12428,  30289,  12503,
     30258,  12577,  30227,  12651,  30196,  12725,  30165,  12799,  30133,  12873,
     30102,  12947,  30070,  13021,  30038,  13095,  30006,  13169,  29973,  13242,
     29941,  13316,  29908,  13389,  29875,  13463,  29842,  13536,  29808,  13609,
     29775,  13682,  29741,  13755,  29707,  13828,  29673,  13901,  29639,  13974,
     29605,  14046,  29570,  14119,  29535,  14192,  29500,  14264,  29465,  14336,
     29430,  14409,  29395,  14481,  29359,  14553,  29323,  14625,  29287,  14697,
     29251,  14769,  29215,  14841,  29178,  14912,  29142,  14984,  29105,  15055,
     29068,  15127,  29030,  15198,  28993,  15269,  28955,  15340,  28918,  15411,
     28880,  15482,  28842,  15553,  28803,  15624,  28765,  15694,  28726,  15765,
     28688,  15835,  28649,  15906,  28610,  15976,  28570,  16046,  28531,  16116,
     28491,  16186,  28451,  16256,  28411,  16326,  28371,  16396,  28331,  16465,
     28290,  16535,  28250,  16604,  28209,  16673,  28168,  16743,  28127,  16812,
     28085,  16881,  28044,  16949,  28002,  17018,  27960,  17087,  27918,  17156,
     27876,  17224,  27834,  17292,  27791,  17361,  27749,  17429,  27706,  17497,
     27663,  17565,  27619,  17633,  27576,  17700,  27533,  17768,  27489,  17835,
     27445,  17903,  27401,  17970,  27357,  18037,  27312,  18104,  27268,  18171,
     27223,  18238,  27178,  18305,  27133,  18372,  27088,  18438,  27043,  18505,
     26997,  18571,  26952,  18637,  26906,  18703,  26860,  18769,  26814,  18835,
     26767,  18901,  26721,  18967,  26674,  19032,  26628,  19098,  26581,  19163,
     26533,  19228,  26486,  19293,  26439,  19358,  26391,  19423,  26343,  19488,
     26296,  19552,  26247,  19617,  26199,  19681,  26151,  19745,  26102,  19809,
     26054,  19873,  26005,  19937,  25956,  20001,  25907,  20065,  25857,  20128,
     25808,  20192,  25758,  20255,  25708,  20318,  25658,  20381,  25608,  20444,
     25558,  20507,  25508,  20569,  25457,  20632,  25406,  20694,  25355,  20757,
     25304,  20819,  25253,  20881,  25202,  20943,  25151,  21005,  25099,  21066,
     25047,  21128,  24995,  21189,  24943,  21251,  24891,  21312,  24838,  21373,
     24786,  21434,  24733,  21494,  24680,  21555,  24627,  21616,  24574,  21676,
     24521,  21736,  24468,  21796,  24414,  21856,  24360,  21916,  24306,  21976,
     24252,  22035,  24198,  22095,  24144,  22154,  24090,  22213,  24035,  22272,
     23980,  22331,  23925,  22390,  23870,  22449,  23815,  22507,  23760,  22566,
     23704,  22624,  23649,  22682,  23593,  22740,  23537,  22798,  23481,  22856,
     23425,  22913,  23369,  22971,  23312,  23028,  23256,  23085,  23199,  23142,
];

/// Region standard deviation 2^(i/2), rounded to integer.
pub const REGION_STDDEV_TABLE: [i16; 30] = [
         1,      1,      2,      3,      4,      6,      8,     11,     16,     23,
        32,     45,     64,     91,    128,    181,    256,    362,    512,    724,
      1024,   1448,   2048,   2896,   4096,   5793,   8192,  11585,  16384,  23170,
];

/// Per-category inverse quantizer step 2^((3-cat)/2), Q13.
pub const STEP_INVERSE_TABLE: [i16; 7] = [
     23170,  16384,  11585,   8192,   5793,   4096,   2896,
];

/// Reconstruction centroids per category, Q12. Rows are padded with
/// zeros past each category's highest bin.
pub const QUANT_CENTROID_TABLE: [[i16; 14]; 7] = [
    [0, 1606, 3117, 4588, 6050, 7504, 8942, 10408, 11850, 13292, 14737, 16146, 17564, 19350],
    [0, 2228, 4342, 6402, 8471, 10531, 12583, 14590, 16671, 18924, 0, 0, 0, 0],
    [0, 3056, 5997, 8929, 11805, 14680, 17678, 0, 0, 0, 0, 0, 0, 0],
    [0, 4121, 8192, 12259, 16323, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 5411, 11071, 16314, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 6787, 14299, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 8045, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Category 5 noise-fill factor by non-zero count, Q15.
pub const NOISE_FILL_FACTOR_CAT5: [i16; 21] = [
     23171,  20247,  16400,  10551,   5793,   5793,   5793,   5793,   5793,   5793,
      5793,   5793,   5793,   5793,   5793,   5793,   5793,   5793,   5793,   5793,
         0,
];

/// Category 6 noise-fill factor by non-zero count, Q15.
pub const NOISE_FILL_FACTOR_CAT6: [i16; 21] = [
     23171,  18632,  11675,   8192,   8192,   8192,   8192,   8192,   8192,   8192,
      8192,   8192,   8192,   8192,   8192,   8192,   8192,   8192,   8192,   8192,
         0,
];

/// Category 7 noise-fill factor (1/sqrt(2)), Q15.
pub const NOISE_FILL_FACTOR_CAT7: i16 = 23171;

/// Huffman codes for differential region power, one 24-entry section
/// per region pair starting at region 1. Regions past 13 reuse the
/// last section.
pub const ENVELOPE_DIFF_CODES: [i16; 312] = [
        8,    38,    18,    10,     7,     6,     3,     2,     0,     1,     7,     6,
        5,     4,    11,    78,   158,   318,  1278,  1279,  2552,  2553,  2554,  2555,
       36,     8,     3,     5,     0,     1,     7,     6,     4,     3,     2,     5,
        3,     4,     5,    19,    74,   150,   302,  1213,  1214,  1215,  2424,  2425,
     2582,   644,   160,    41,     5,    11,     7,     5,     4,     1,     0,     6,
        4,     7,     3,     6,     4,    21,    81,   323,  1290,  5167, 10332, 10333,
     2940,   366,   181,   180,    47,    46,    27,    10,     8,     5,     1,     0,
        3,     7,     4,     9,    12,    26,    44,   182,   734,  2941,  2942,  2943,
     3982,  7967,   994,   249,    63,    26,    19,    18,    14,     8,     6,     1,
        0,     2,     5,     7,    12,    30,    27,   125,   496,  1990, 15932, 15933,
     3254,  1626,   407,   206,   202,   100,    30,    14,     3,     5,     3,     0,
        2,     4,     2,    13,    24,    31,   102,   207,   812,  6511, 13020, 13021,
     1110,  2216,  1111,   139,    35,     9,     3,    20,    11,     4,     2,     1,
        3,     3,     1,     0,    21,     5,    16,    68,   276,  2217,  2218,  2219,
     1013,  1014,   127,    62,    29,     6,     4,    16,     0,     1,     3,     2,
        3,     1,     5,     9,    17,     5,    28,    30,   252,  1015,  2024,  2025,
      381,   380,   372,   191,    94,    44,    16,    10,     7,     3,     1,     0,
        2,     6,     9,    17,    45,    92,   187,   746,  1494,  2991,  5980,  5981,
     3036,   758,   188,    45,    43,    10,     4,     3,     6,     4,     2,     0,
        3,     7,    11,    20,    42,    44,    46,    95,   378,  3037,  3038,  3039,
      751,    92,    45,    20,    26,     4,    12,     7,     4,     0,     4,     1,
        3,     5,     5,     3,    27,    21,    44,    47,   186,   374,  1500,  1501,
    -19964,  5697,  2849,  1425,   357,    45,    23,     6,    10,     7,     2,     2,
        3,     0,     4,     6,     7,    88,   179,   713, 11392, -19963, -19962, -19961,
     2511,  5016,  5018,  5017,   312,    79,    38,    36,    30,    14,     6,     0,
        2,     1,     3,     5,     8,    31,    37,   157,   626,  5019,  5020,  5021,
];

/// Bit widths matching ENVELOPE_DIFF_CODES.
pub const ENVELOPE_DIFF_WIDTHS: [i16; 312] = [
        4,     6,     5,     5,     4,     4,     4,     4,     4,     4,     3,     3,
        3,     4,     5,     7,     8,     9,    11,    11,    12,    12,    12,    12,
       10,     8,     6,     5,     5,     4,     3,     3,     3,     3,     3,     3,
        4,     5,     7,     9,    11,    12,    13,    15,    15,    15,    16,    16,
       12,    10,     8,     6,     5,     4,     4,     4,     4,     4,     4,     3,
        3,     3,     4,     4,     5,     5,     7,     9,    11,    13,    14,    14,
       13,    10,     9,     9,     7,     7,     5,     5,     4,     3,     3,     3,
        3,     3,     4,     4,     4,     5,     7,     9,    11,    13,    13,    13,
       12,    13,    10,     8,     6,     6,     5,     5,     4,     4,     3,     3,
        3,     3,     3,     4,     5,     5,     6,     7,     9,    11,    14,    14,
       12,    11,     9,     8,     8,     7,     5,     4,     4,     3,     3,     3,
        3,     3,     4,     4,     5,     5,     7,     8,    10,    13,    14,    14,
       15,    16,    15,    12,    10,     8,     6,     5,     4,     3,     3,     3,
        2,     3,     4,     5,     5,     7,     9,    11,    13,    16,    16,    16,
       14,    14,    11,    10,     9,     7,     7,     5,     5,     4,     3,     3,
        2,     3,     3,     4,     5,     7,     9,     9,    12,    14,    15,    15,
        9,     9,     9,     8,     7,     6,     5,     4,     3,     3,     3,     3,
        3,     3,     4,     5,     6,     7,     8,    10,    11,    12,    13,    13,
       14,    12,    10,     8,     6,     6,     5,     4,     3,     3,     3,     3,
        3,     3,     4,     5,     6,     8,     8,     9,    11,    14,    14,    14,
       13,    10,     9,     8,     6,     6,     5,     4,     4,     4,     3,     3,
        2,     3,     4,     5,     6,     8,     9,     9,    11,    12,    14,    14,
       16,    13,    12,    11,     9,     6,     5,     5,     4,     4,     4,     3,
        2,     3,     3,     4,     5,     7,     8,    10,    14,    16,    16,    16,
       13,    14,    14,    14,    10,     8,     7,     7,     5,     4,     3,     3,
        2,     3,     3,     4,     5,     5,     7,     9,    11,    14,    14,    14,
];

/// Decode trees matching ENVELOPE_DIFF_CODES: 23 nodes per section.
pub const ENVELOPE_DIFF_TREE: [[i16; 2]; 299] = [
    [6, 1], [2, 14], [3, -12], [0, 4], [-2, 5], [-1, 15],
    [11, 7], [8, 10], [-13, 9], [-3, -14], [-5, -4], [13, 12],
    [-7, -6], [-8, -9], [-11, -10], [-15, 16], [-16, 17], [-17, 18],
    [20, 19], [-18, -19], [21, 22], [-20, -21], [-22, -23], [1, 12],
    [2, 15], [3, 10], [4, -5], [-4, 5], [6, -2], [7, -14],
    [-1, 8], [9, -15], [0, 16], [11, -12], [-13, -3], [14, 13],
    [-7, -6], [-8, -11], [-10, -9], [-16, 17], [-17, 18], [-18, 19],
    [20, 21], [22, -19], [-20, -21], [-22, -23], [12, 1], [2, 20],
    [-12, 3], [4, -5], [5, -17], [6, -3], [7, -18], [-2, 8],
    [9, -19], [-1, 10], [-20, 11], [0, 21], [13, 16], [19, 14],
    [15, -14], [-16, -4], [18, 17], [-15, -6], [-8, -7], [-10, -9],
    [-11, -13], [22, -21], [-22, -23], [1, 15], [21, 2], [3, -12],
    [-14, 4], [-7, 5], [6, 14], [-18, 7], [13, 8], [-19, 9],
    [-1, 10], [-20, 11], [12, 22], [0, -21], [-3, -2], [-5, -4],
    [19, 16], [17, -13], [-16, 18], [-17, -6], [20, -9], [-8, -15],
    [-11, -10], [-22, -23], [13, 1], [18, 2], [-10, 3], [-8, 4],
    [-17, 5], [6, -4], [7, -19], [8, -3], [-20, 9], [-2, 10],
    [-21, 11], [0, 12], [22, -1], [21, 14], [-13, 15], [16, -15],
    [-16, 17], [-5, -18], [19, -14], [-9, 20], [-7, -6], [-12, -11],
    [-22, -23], [16, 1], [19, 2], [3, 14], [4, -15], [-16, 5],
    [6, 12], [-5, 7], [-4, 8], [9, -2], [-20, 10], [-1, 11],
    [0, 21], [-18, 13], [-3, -19], [-7, 15], [-6, -17], [17, 20],
    [-11, 18], [-14, -8], [-13, -9], [-12, -10], [22, -21], [-22, -23],
    [1, 17], [2, 21], [3, -11], [4, -14], [-15, 5], [6, -6],
    [7, -17], [8, -5], [-18, 9], [10, -4], [-19, 11], [12, -3],
    [-20, 13], [15, 14], [0, -2], [16, 22], [-1, -21], [18, -12],
    [-9, 19], [20, -8], [-7, -16], [-10, -13], [-22, -23], [1, 17],
    [2, 21], [3, -13], [4, -9], [-8, 5], [16, 6], [-5, 7],
    [15, 8], [-19, 9], [-3, 10], [11, -2], [-20, 12], [13, 14],
    [22, 0], [-1, -21], [-18, -4], [-6, -17], [18, -12], [19, -14],
    [20, -15], [-7, -16], [-11, -10], [-22, -23], [16, 1], [2, 15],
    [13, 3], [-7, 4], [12, 5], [9, 6], [-4, 7], [8, -3],
    [-1, 0], [-17, 10], [11, -18], [-2, 19], [-5, -16], [14, -14],
    [-6, -15], [-13, -8], [18, 17], [-12, -9], [-11, -10], [-19, 20],
    [-20, 21], [22, -21], [-22, -23], [1, 15], [2, 21], [-11, 3],
    [4, -7], [-6, 5], [-5, 6], [14, 7], [-18, 8], [9, -19],
    [-2, 10], [-20, 11], [-1, 12], [13, 22], [0, -21], [-17, -3],
    [16, 20], [-9, 17], [18, -14], [-15, 19], [-16, -4], [-8, -13],
    [-10, -12], [-22, -23], [1, 20], [2, 15], [3, -11], [-9, 4],
    [5, -15], [-5, 6], [14, 7], [13, 8], [9, -19], [-1, 10],
    [-20, 11], [-21, 12], [22, 0], [-18, -2], [-3, -17], [19, 16],
    [17, -7], [-6, 18], [-4, -16], [-8, -14], [21, -12], [-10, -13],
    [-22, -23], [16, 1], [2, -12], [-14, 3], [-8, 4], [5, -6],
    [6, -5], [-17, 7], [8, -18], [9, -4], [10, -19], [11, -3],
    [12, -2], [13, -1], [-20, 14], [15, 22], [0, -21], [17, 20],
    [-13, 18], [-10, 19], [-7, -16], [-11, 21], [-15, -9], [-22, -23],
    [1, 17], [21, 2], [3, -14], [4, -15], [-16, 5], [16, 6],
    [-6, 7], [8, -5], [9, -19], [-4, 10], [-20, 11], [13, 12],
    [22, 0], [14, 15], [-1, -3], [-2, -21], [-7, -18], [-12, 18],
    [-10, 19], [-9, 20], [-8, -17], [-11, -13], [-22, -23],
];

/// Vector Huffman codes for category 0, indexed by the mixed-radix
/// combined bin index. A zero width marks an index with no code.
pub const VECTOR_CODES_CAT0: [i16; 196] = [
         1,      3,     15,     28,     32,      1,     24,     92,      7,     61,
       140,     74,    208,    215,      2,     10,     18,     10,     50,     14,
        78,    108,     21,     62,    186,     78,     70,     71,      1,     22,
        52,     12,     94,      0,     51,    141,    152,      9,     76,    311,
       555,    253,     24,      8,     23,      1,     20,     55,    153,    223,
        73,     79,    444,    213,    418,    511,     14,     58,    107,     22,
       187,    238,     62,    270,    309,    474,    144,    850,     68,    839,
        51,     22,      5,    133,    219,    121,    308,    381,    310,    475,
       633,   1062,    510,   1718,      9,     71,     54,    191,     13,    120,
        16,     24,     95,    848,   1057,   1119,   2552,   2488,     68,     16,
        63,     55,    268,    269,     25,    212,    944,   1059,    838,    508,
      1115,   6876,    110,     30,    239,    105,    473,    318,     68,    760,
      1890,   1056,   2237,    276,   4980,   6877,     26,     50,     46,    278,
       445,    530,   1058,     35,   2232,   1716,   4472,    277,   4979,      0,
       218,    213,    276,    317,    145,    639,    428,   1063,   1891,    139,
      4473,   4982,      0,      0,     54,     75,    271,    554,    849,   1117,
       277,    279,   5107,   4978,  10212,      0,      0,      0,    154,     94,
       851,    310,   1277,    509,   2233,   1717,  10213,   4983,      0,      0,
         0,      0,    761,    632,    252,    276,    623,    556,   1114,   3439,
      4981,      0,      0,      0,      0,      0,
];
pub const VECTOR_WIDTHS_CAT0: [i16; 196] = [
       1,    4,    5,    6,    7,    8,    8,    8,    9,    9,    9,   10,
      11,   11,    4,    5,    6,    7,    7,    8,    8,    8,    9,    9,
       9,   10,   11,   11,    6,    6,    7,    8,    8,    9,    9,    9,
       9,   10,   10,   10,   11,   12,    6,    7,    8,    9,    9,    9,
       9,    9,   10,   10,   10,   11,   12,   13,    7,    7,    8,    9,
       9,    9,   10,   10,   10,   10,   11,   11,   13,   13,    7,    8,
       9,    9,    9,   10,   10,   10,   10,   10,   11,   12,   13,   14,
       8,    8,    9,    9,   10,   10,   11,   11,   11,   11,   12,   12,
      13,   15,    8,    9,    9,   10,   10,   10,   11,   11,   11,   12,
      13,   13,   15,   16,    8,    9,    9,   10,   10,   10,   11,   11,
      12,   12,   13,   15,   16,   16,    9,    9,   10,   10,   10,   11,
      12,   12,   13,   14,   14,   15,   16,    0,    9,    9,   10,   10,
      11,   11,   12,   12,   12,   14,   14,   16,    0,    0,   10,   10,
      10,   11,   11,   12,   13,   13,   14,   16,   15,    0,    0,    0,
      11,   11,   11,   12,   12,   13,   13,   14,   15,   16,    0,    0,
       0,    0,   11,   11,   12,   13,   13,   14,   15,   15,   16,    0,
       0,    0,    0,    0,
];

/// Vector Huffman codes for category 1, indexed by the mixed-radix
/// combined bin index. A zero width marks an index with no code.
pub const VECTOR_CODES_CAT1: [i16; 100] = [
         1,      1,     10,     24,     35,     13,     76,    115,    148,    406,
         2,      0,     14,     26,     32,     12,     75,     16,    154,    274,
        11,     12,     31,     36,     14,     69,    122,    107,    243,    464,
        27,      5,     39,     52,     61,    110,    136,    225,    407,    931,
        31,     33,     59,    103,    113,    149,    213,    424,    988,   3874,
         9,     54,    100,     30,    117,     35,     68,    850,    851,   7917,
       120,    102,    114,    120,    233,    495,    623,   1936,   7750,  19921,
        31,    111,    202,    242,    486,    449,    930,   7916,  19920,      0,
       275,    246,    485,     69,    487,   1978,   3959,   4981,      0,      0,
       310,    448,    969,   1244,   2491,   7751,   9961,      0,      0,      0,
];
pub const VECTOR_WIDTHS_CAT1: [i16; 100] = [
       1,    4,    5,    6,    7,    8,    8,    9,    9,   10,    4,    5,
       5,    6,    7,    8,    8,    9,    9,   10,    5,    6,    6,    7,
       8,    8,    8,    9,    9,   11,    6,    7,    7,    8,    8,    9,
       9,   10,   10,   12,    7,    7,    8,    8,    9,    9,   10,   11,
      11,   13,    8,    8,    8,    9,    9,   10,   11,   12,   12,   14,
       8,    8,    9,    9,   10,   10,   11,   12,   14,   16,    9,    9,
       9,   10,   11,   11,   12,   14,   16,    0,   10,    9,   10,   11,
      11,   12,   13,   14,    0,    0,   10,   11,   11,   12,   13,   14,
      15,    0,    0,    0,
];

/// Vector Huffman codes for category 2, indexed by the mixed-radix
/// combined bin index. A zero width marks an index with no code.
pub const VECTOR_CODES_CAT2: [i16; 49] = [
         1,      3,      7,     10,     25,     91,    180,      0,      2,      8,
        23,     19,     36,     75,     10,      9,     13,     24,     30,     63,
       218,     11,      8,     25,     29,     52,    353,    439,     28,     24,
        89,     55,    108,    725,   2897,     62,     53,     74,    354,    438,
     11584,  23171,    363,    352,    355,   1449,   5793,  23170,      0,
];
pub const VECTOR_WIDTHS_CAT2: [i16; 49] = [
       1,    3,    5,    7,    8,    8,    9,    4,    4,    5,    6,    8,
       9,   10,    5,    5,    6,    7,    8,    9,   11,    7,    7,    7,
       8,    9,   10,   12,    8,    8,    8,    9,   10,   11,   13,    9,
       9,   10,   10,   12,   15,   16,   10,   10,   10,   12,   14,   16,
       0,
];

/// Vector Huffman codes for category 3, indexed by the mixed-radix
/// combined bin index. A zero width marks an index with no code.
pub const VECTOR_CODES_CAT3: [i16; 625] = [
         3,      6,     30,     58,    233,      5,      9,     41,     55,    363,
        57,     77,    144,    366,    654,    296,    314,    119,   1291,   2601,
       199,     65,   1332,    148,   6342,      4,     15,    147,     31,   1292,
        21,      5,      0,    118,     59,     75,     59,    156,     12,   2392,
       253,    115,    211,    477,   2605,    232,    909,    150,   1935, -27248,
        89,      3,     27,    151,   2000,     88,     80,    464,   2018,   2576,
        61,    226,    612,   1932,   2594,    614,    631,    510,   5795,   6337,
      2684,   2588,   1925,   2285,      0,    250,    735,   1328,   2202,    152,
       297,    210,    149,   2226,   2580,    476,   1197,   2608,   2250,   2598,
       872,   2683,   1924,   2271,   6340,   1934,   2158,   2184,   2288,      0,
       729,    869,   2241,   2207,   2564,    501,    146,   9573,   2231,   2584,
      2586,   3635,    132,   2254,      0,   2568,   2177,   2169,   2275,      0,
      2222,   2188,      0,      0,      0,      8,      4,    117,    326,   5796,
        23,     22,     11,    103,    154,     13,    160,    298,   1005,   5798,
       233,     64,   1331,   5793,   2602,   2686,    145,    135,   2278,   6343,
         8,     21,    127,     66,   3724,      3,     12,     26,     15,   3725,
       124,     54,    104,   1006,   2003,    613,     30,     58,   5794,   2606,
      2680,    864,    873,   2282, -27247,      2,    162,    324,    152,    151,
        79,      9,     98,    511,    157,     50,     14,    325,   3634,   2595,
       252,     26,    163,   2268,   6338,    793,   5797,   2181,   2286,      0,
        12,    654,   5241,   2203,   2561,     48,    117,   2016,   1929,   2581,
        39,    728,   1330,    145,   2599,    866,   1863,    134,   2272,   6341,
      2165,   2199,   2185,   2289,      0,    251,   1334,   2245,   2208,   2565,
      1231,    397,  11598,   2232,   2585,   1329,    155,   2147,   2255,      0,
      2227,   2194,   2170,   2276,      0,   2189,   2264,      0,      0,      0,
        46,     82,    219,   2687,   2292,    112,    146,    505,   1230,    154,
       653,    365,   1004,   1930,    158,   2590,    144,    133,   2259,   2603,
      2160,   2251,    136,   2279,      0,     47,     56,    239,    874,   2297,
         5,     53,    229,   1333,   2001,    118,     41,    254,   5247,   2592,
       867,    409,   2609,    147,   2607,    128,   2193,   2178,   2283,      0,
       180,     42,   1468,   1927,   2302,    152,      8,     87,    141,   2578,
       253,    121,   2017,   1933,   2596,   2589,   4787,   5246,   2269,   6339,
      2281,    156,   2182,   2287,      0,    644,    930,    147,   2204,   2562,
       110,     56,   5244,   2228,   2582,     57,    408,    871,    146,   2600,
      2187,   2572,   2167,   2273,      0,   2146,   2214,   2186,      0,      0,
       870,   1931,   1921,   2209,      0,    153,    868,  11599,   2233,      0,
      1920,   2573,   2148,   2256,      0,    150,   2571,   2171,      0,      0,
         0,      0,      0,      0,      0,    145,    725,    865,    138,   2293,
       334,   1290,   2682,    140,    155,   2587,   2610,   5245,   2238,   2589,
      2240,   2173,   2153,   2260,   2604,   2290,   2156,   2175,   2280,      0,
        28,    599,    410,   2195,   2298,    111,    630,   2015,   2219,   2574,
      2611,   2591,   2560,   2243,   2593,    144,    153,   1923,   2265,   6336,
      2192,   2197,   2179,   2284,      0,      5,    411,   2681,   2200,   2303,
       124,     86,   5243,   2224,   2579,   3633,   5792,    129,   2248,   2597,
      2242,   2221,   2163,   2270,      0,   2223,   2258,   2183,      0,      0,
      1311,    137,    142,   2205,   2563,   1310,   2019,   2190,   2229,   2583,
      1926,    130,   2144,   2253,      0,   2296,    319,   2168,   2274,      0,
      2291,   2152,      0,      0,      0,   2172,   2300,   2262,   2210,      0,
      2267,    131,   2235,   2234,      0,   2566,   2587,   2149,      0,      0,
      2567,   2257,      0,      0,      0,      0,      0,      0,      0,      0,
       228,   3632,   2263,   2191,   2294,   1469,   5240,   2591,   2215,   2570,
       143,   2252,   2277,   2239,      0,   2217,   2176,   2154,   2261,      0,
     19145,   2161,      0,      0,      0,    455,    148,   2247,   2196,   2299,
      2014,    875,   2577,   2220,   2575,   5242,   1928,   1922,   2244,      0,
       318,   2590,   2159,   2266,      0,   2212,   2246,      0,      0,      0,
      1335,   2301,   2180,   2201,      0,   2685,   2002,   2166,   2225,      0,
      2216,   2295,   2588,   2249,      0,   2218,   2174,   2164,      0,      0,
         0,      0,      0,      0,      0,    139,   2586,   2237,   2206,      0,
       149,   2162,   2198,   2230,      0,   2236,   2157,   2145,      0,      0,
      2155,   2150,      0,      0,      0,      0,      0,      0,      0,      0,
      2211,   2213,      0,      0,      0,   2569,   2151,      0,      0,      0,
         0,      0,      0,      0,      0,      0,      0,      0,      0,      0,
         0,      0,      0,      0,      0,
];
pub const VECTOR_WIDTHS_CAT3: [i16; 625] = [
       2,    4,    6,    8,    9,    5,    5,    6,    8,    9,    7,    7,
       8,    9,   11,    9,    9,   10,   11,   16,   11,   11,   12,   15,
      16,    5,    6,    8,   10,   11,    5,    6,    8,    9,   12,    7,
       7,    8,   10,   12,    9,    9,   10,   11,   16,   11,   11,   13,
      14,   16,    7,    9,   11,   13,   14,    7,    8,   10,   12,   16,
       9,    9,   10,   14,   16,   10,   10,   12,   13,   16,   13,   12,
      14,   16,    0,    9,   10,   12,   16,   15,    9,   10,   13,   16,
      16,   11,   11,   12,   16,   16,   13,   13,   14,   16,   16,   14,
      16,   16,   16,    0,   10,   13,   16,   16,   16,   12,   13,   14,
      16,   16,   12,   13,   15,   16,    0,   16,   16,   16,   16,    0,
      16,   16,    0,    0,    0,    4,    6,    8,   10,   13,    6,    6,
       8,   10,   13,    9,    8,    9,   11,   13,   11,   11,   12,   13,
      16,   13,   13,   15,   16,   16,    5,    6,    8,   11,   13,    6,
       6,    8,   10,   13,    8,    8,    9,   11,   14,   10,   10,   12,
      13,   16,   13,   13,   13,   16,   16,    8,    8,   10,   13,   15,
       7,    8,   10,   12,   15,    9,    9,   10,   13,   16,   11,   11,
      12,   16,   16,   13,   13,   16,   16,    0,    9,   10,   13,   16,
      16,    9,   10,   12,   14,   16,   11,   10,   12,   15,   16,   13,
      12,   15,   16,   16,   16,   16,   16,   16,    0,   11,   12,   16,
      16,   16,   11,   12,   14,   16,   16,   12,   13,   16,   16,    0,
      16,   16,   16,   16,    0,   16,   16,    0,    0,    0,    6,    8,
      11,   13,   16,    8,    8,   10,   11,   15,   10,    9,   11,   14,
      15,   12,   13,   15,   16,   16,   16,   16,   15,   16,    0,    6,
       8,   10,   13,   16,    8,    8,   10,   12,   14,   10,   10,   11,
      13,   16,   13,   12,   12,   15,   16,   15,   16,   16,   16,    0,
       8,   10,   11,   14,   16,    8,    9,   11,   15,   16,   11,   10,
      12,   14,   16,   12,   13,   13,   16,   16,   16,   15,   16,   16,
       0,   10,   11,   13,   16,   16,   10,   12,   13,   16,   16,   12,
      12,   13,   15,   16,   16,   16,   16,   16,    0,   16,   16,   16,
       0,    0,   13,   14,   14,   16,    0,   13,   13,   14,   16,    0,
      14,   16,   16,   16,    0,   15,   16,   16,    0,    0,    0,    0,
       0,    0,    0,    8,   10,   13,   15,   16,   10,   11,   13,   15,
      15,   12,   12,   13,   16,   16,   16,   16,   16,   16,   16,   16,
      16,   16,   16,    0,    8,   10,   12,   16,   16,   10,   10,   12,
      16,   16,   12,   12,   16,   16,   16,   15,   15,   14,   16,   16,
      16,   16,   16,   16,    0,   10,   12,   13,   16,   16,   10,   11,
      13,   16,   16,   13,   13,   15,   16,   16,   16,   16,   16,   16,
       0,   16,   16,   16,    0,    0,   12,   15,   15,   16,   16,   12,
      12,   16,   16,   16,   14,   15,   16,   16,    0,   16,   16,   16,
      16,    0,   16,   16,    0,    0,    0,   16,   16,   16,   16,    0,
      16,   15,   16,   16,    0,   16,   16,   16,    0,    0,   16,   16,
       0,    0,    0,    0,    0,    0,    0,    0,   10,   13,   16,   16,
      16,   11,   13,   16,   16,   16,   15,   16,   16,   16,    0,   16,
      16,   16,   16,    0,   15,   16,    0,    0,    0,   10,   13,   16,
      16,   16,   12,   13,   16,   16,   16,   13,   14,   14,   16,    0,
      16,   16,   16,   16,    0,   16,   16,    0,    0,    0,   12,   16,
      16,   16,    0,   13,   14,   16,   16,    0,   16,   16,   16,   16,
       0,   16,   16,   16,    0,    0,    0,    0,    0,    0,    0,   15,
      16,   16,   16,    0,   15,   16,   16,   16,    0,   16,   16,   16,
       0,    0,   16,   16,    0,    0,    0,    0,    0,    0,    0,    0,
      16,   16,    0,    0,    0,   16,   16,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,
];

/// Vector Huffman codes for category 4, indexed by the mixed-radix
/// combined bin index. A zero width marks an index with no code.
pub const VECTOR_CODES_CAT4: [i16; 256] = [
         1,      1,     54,    440,      9,     15,     24,    203,     88,    116,
       443,   8714,   1088,    885,   3240,  30418,     10,     26,    180,   2294,
        16,     24,    137,    189,     13,    119,    474,   1534,   1146,   1431,
      9181,  30420,     91,    102,    808,  30200,     15,     24,   1768,  30405,
       545,    716,   3238,  30416,   8715,  30402,  30190,      0,   1426,   3237,
     30414,  30203,   1131,   5711,   1526,  30408,   3241,   3236,  30182,      0,
     30197,  30157,      0,      0,      2,     23,     25,   2857,     28,     13,
       273,   2872,    283,    100,   1434,   1533,   4356,   2870,  30185,  30419,
         0,     14,    287,   7061,     25,     15,    280,  11492,    236,    234,
      1769,   1535,    377,   5708,  30188,  30421,     10,    103,    811,   1531,
       111,    181,   2259,  30406,    951,    883,   3239,  30417,  30176,  30168,
     30191,      0,   1430,   7060,  22986,  30204,   1437,   3531,  30169,  30409,
      9180,   1528,  30183,      0,  30184,  30161,      0,      0,      4,     28,
      1621,   1529,     22,    470,    376,  30207,   3803,   2260,   1527,  30412,
     30410,   1532,  30186,      0,     69,     29,   2261,   1530,    142,    281,
      2871,  30403,   2856,   1764,  30177,  30415,  30162,  30192,  30189,      0,
        46,   1429,  30411,  30202,    719,   1128,   1525,  30407,   5709,   9183,
     30181,      0,  30165,  30173,      0,      0,  30172,  30401,  22987,      0,
      1520,  30156,  30170,      0,  30179,  30180,      0,      0,      0,      0,
         0,      0,    572,   5710,  15211,  30195,   2258,   3768,  30159,  30400,
     30193,  30187,  30174,      0,  30175,  30160,      0,      0,    712,   7538,
     30198,  30199,   2179,   5747,   1523,  30404,  30166,  30171,  30178,      0,
     30163,  30205,      0,      0,   9182,   1524,  30413,      0,   1521,  30206,
     30167,      0,   1522,  30164,      0,      0,      0,      0,      0,      0,
     30194,  30201,      0,      0,  30196,  30158,      0,      0,      0,      0,
         0,      0,      0,      0,      0,      0,
];
pub const VECTOR_WIDTHS_CAT4: [i16; 256] = [
       2,    4,    6,    9,    4,    4,    7,   10,    7,    7,    9,   14,
      11,   10,   14,   15,    4,    5,    8,   12,    5,    5,    8,   12,
       8,    7,    9,   15,   11,   11,   14,   15,    7,    9,   12,   15,
       8,    9,   11,   15,   10,   10,   14,   15,   14,   15,   15,    0,
      11,   14,   15,   15,   11,   13,   15,   15,   14,   14,   15,    0,
      15,   15,    0,    0,    4,    5,    9,   12,    5,    6,    9,   12,
       9,    9,   11,   15,   13,   12,   15,   15,    5,    6,    9,   13,
       5,    6,    9,   14,    8,    8,   11,   15,   13,   13,   15,   15,
       8,    9,   12,   15,    7,    8,   12,   15,   10,   10,   14,   15,
      15,   15,   15,    0,   11,   13,   15,   15,   11,   12,   15,   15,
      14,   15,   15,    0,   15,   15,    0,    0,    7,    9,   13,   15,
       9,    9,   13,   15,   12,   12,   15,   15,   15,   15,   15,    0,
       7,    9,   12,   15,    8,    9,   12,   15,   12,   11,   15,   15,
      15,   15,   15,    0,   10,   11,   15,   15,   10,   11,   15,   15,
      13,   14,   15,    0,   15,   15,    0,    0,   15,   15,   15,    0,
      15,   15,   15,    0,   15,   15,    0,    0,    0,    0,    0,    0,
      10,   13,   14,   15,   12,   12,   15,   15,   15,   15,   15,    0,
      15,   15,    0,    0,   10,   13,   15,   15,   12,   13,   15,   15,
      15,   15,   15,    0,   15,   15,    0,    0,   14,   15,   15,    0,
      15,   15,   15,    0,   15,   15,    0,    0,    0,    0,    0,    0,
      15,   15,    0,    0,   15,   15,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,
];

/// Vector Huffman codes for category 5, indexed by the mixed-radix
/// combined bin index. A zero width marks an index with no code.
pub const VECTOR_CODES_CAT5: [i16; 243] = [
         0,      4,    139,      9,     14,    241,    243,    444,   8152,     11,
        25,    971,     25,     49,   1559,    388,    778,  28634,    255,   1769,
     14332,    778,   3111,  28626,  28594,  14319,      0,     10,     31,   1554,
        27,     61,   1563,   1018,   3569,  28632,     26,     49,   3582,     58,
       119,   6220,   1559,   7761,  28636,    885,   3106,  28608,    780,   3130,
     28628,  28618,  28588,      0,    390,   1938,  28596,   1562,   3536,  28616,
     28611,  28576,      0,    508,   3883,  28604,   3107,  12443,  28624,  28565,
     28584,      0,  14335,  28621,      0,  28593,  28568,      0,      0,      0,
         0,      5,     28,    968,     35,     61,   1558,   6210,   6209,  28631,
        26,     96,   3560,     62,     96,   7133,   6256,   7760,  28635,   1782,
      4077,  28607,   3131,   3580,  28627,  28571,  28587,      0,     16,     60,
      3581,     68,    138,   6257,   3567,   6211,  28633,     54,    126,   7132,
       118,    240,  28622,  28562,   7762,  28637,   6208,   7756,  28609,   7123,
      7759,  28629,  28590,  28589,      0,    391,   3882,  28597,   3568,   8153,
     28617,  28570,  28577,      0,   1558,  14334,  28605,   7758,  28560,  28625,
     28591,  28585,      0,  28579,  28566,      0,  28586,  28569,      0,      0,
         0,      0,    220,   1781,  28592,   3129,   4079,  28612,  28614,  28572,
         0,   1566,   7757,  28600,   4078,  12442,  28620,  28619,  28580,      0,
     28599,  28602,      0,  28598,  28564,      0,      0,      0,      0,    443,
      3134,  28595,   3537,  28491,  28615,  28601,  28575,      0,   3135,  14244,
     28603,   7763,  28490,  28623,  28606,  28583,      0,  28578,  28582,      0,
     28630,  28567,      0,      0,      0,      0,  14333,  28574,      0,  28610,
     28573,      0,      0,      0,      0,  28581,  28613,      0,  28563,  28561,
         0,      0,      0,      0,      0,      0,      0,      0,      0,      0,
         0,      0,      0,
];
pub const VECTOR_WIDTHS_CAT5: [i16; 243] = [
       2,    4,    8,    4,    5,    8,    8,    9,   14,    4,    6,   10,
       5,    6,   11,   10,   11,   15,    9,   11,   14,   10,   12,   15,
      15,   14,    0,    4,    5,   11,    6,    7,   12,   11,   12,   15,
       5,    7,   12,    6,    7,   13,   12,   13,   15,   10,   12,   15,
      11,   12,   15,   15,   15,    0,    9,   11,   15,   12,   12,   15,
      15,   15,    0,   10,   12,   15,   12,   14,   15,   15,   15,    0,
      14,   15,    0,   15,   15,    0,    0,    0,    0,    4,    5,   10,
       6,    6,   12,   13,   13,   15,    6,    7,   12,    7,    8,   13,
      13,   13,   15,   11,   13,   15,   12,   12,   15,   15,   15,    0,
       5,    7,   12,    7,    8,   13,   12,   13,   15,    6,    8,   13,
       7,    8,   15,   15,   13,   15,   13,   13,   15,   13,   13,   15,
      15,   15,    0,   10,   12,   15,   12,   14,   15,   15,   15,    0,
      11,   14,   15,   13,   15,   15,   15,   15,    0,   15,   15,    0,
      15,   15,    0,    0,    0,    0,    8,   11,   15,   12,   13,   15,
      15,   15,    0,   11,   13,   15,   13,   14,   15,   15,   15,    0,
      15,   15,    0,   15,   15,    0,    0,    0,    0,    9,   12,   15,
      12,   15,   15,   15,   15,    0,   12,   14,   15,   13,   15,   15,
      15,   15,    0,   15,   15,    0,   15,   15,    0,    0,    0,    0,
      14,   15,    0,   15,   15,    0,    0,    0,    0,   15,   15,    0,
      15,   15,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,
];

/// Vector Huffman codes for category 6, indexed by the mixed-radix
/// combined bin index. A zero width marks an index with no code.
pub const VECTOR_CODES_CAT6: [i16; 32] = [
         1,      1,      3,      1,      5,     27,      3,      3,      4,      0,
        28,    104,     24,    103,    102,    213,      2,     30,     31,      4,
        29,    200,      5,    425,      2,    107,    105,    402,    101,    806,
       424,    807,
];
pub const VECTOR_WIDTHS_CAT6: [i16; 32] = [
       1,    4,    4,    6,    4,    6,    6,    8,    4,    7,    6,    8,
       6,    8,    8,    9,    4,    6,    6,    9,    6,    9,    9,   10,
       6,    8,    8,   10,    8,   11,   10,   11,
];

/// Decode tree for category 0 vector codes.
pub const VECTOR_TREE_CAT0: [[i16; 2]; 180] = [
    [1, 0], [2, 4], [12, 3], [-14, -1], [8, 5], [46, 6],
    [7, -2], [-3, 98], [9, 21], [10, 44], [11, 30], [-4, 103],
    [13, 17], [14, 49], [15, -28], [16, 25], [71, -5], [33, 18],
    [19, 27], [20, 38], [-6, 72], [-15, 22], [-29, 23], [24, 70],
    [-7, 61], [75, 26], [131, -8], [-56, 28], [29, 60], [119, -9],
    [80, 31], [32, -85], [-10, -35], [34, 45], [-43, 35], [36, 62],
    [92, 37], [-11, -155], [39, 89], [40, 42], [41, -115], [-12, 95],
    [94, 43], [128, -13], [-16, 52], [-17, 88], [47, 54], [-42, 48],
    [-18, -70], [57, 50], [69, 51], [-19, 84], [73, 53], [-20, 122],
    [68, 55], [56, 90], [-21, 118], [64, 58], [59, 100], [-46, -22],
    [-23, -100], [-24, -60], [77, 63], [-25, -51], [65, -84], [-99, 66],
    [157, 67], [-26, -27], [-30, 99], [-31, 150], [-32, 120], [-33, -45],
    [-127, -34], [74, 78], [-36, -48], [76, -72], [113, -37], [-38, 145],
    [106, 79], [-78, -39], [-98, 81], [82, 138], [-142, 83], [-157, -40],
    [-113, 85], [-62, 86], [87, 96], [-184, -41], [-71, -44], [-86, -47],
    [-112, 91], [93, -49], [109, -50], [-52, -130], [-105, -53], [-54, 116],
    [156, 97], [-82, -55], [-57, 101], [110, -58], [-59, 133], [107, 102],
    [-61, -114], [117, 104], [152, 105], [-63, -156], [-76, -64], [153, 108],
    [-65, -79], [-66, -144], [111, -141], [135, 112], [-67, -170], [-90, 114],
    [115, -133], [-68, 167], [-108, -69], [125, -73], [-140, -74], [-89, -75],
    [121, -87], [164, -77], [123, 141], [124, -143], [-183, -80], [136, 126],
    [-131, 127], [-81, -147], [-146, 129], [173, 130], [-83, 162], [132, -88],
    [-91, -104], [-128, 134], [-169, -92], [-93, -158], [137, 155], [-121, -94],
    [-129, 139], [171, 140], [166, -95], [-117, 142], [143, -145], [144, -172],
    [-96, 178], [-168, 146], [-171, 147], [148, -186], [149, 169], [-97, 175],
    [-126, 151], [-154, -101], [-102, -103], [154, -116], [-106, 165], [-132, -107],
    [-109, -173], [-118, 158], [177, 159], [160, -161], [-187, 161], [-188, -110],
    [163, -189], [-111, -125], [-119, -182], [-120, -148], [174, -122], [168, -149],
    [-123, -137], [170, 176], [-124, -190], [172, -159], [-134, -174], [-135, -175],
    [-136, -150], [-163, -138], [-151, -177], [-185, -160], [179, -162], [-164, -176],
];

/// Decode tree for category 1 vector codes.
pub const VECTOR_TREE_CAT1: [[i16; 2]; 93] = [
    [1, 0], [2, 4], [3, 20], [13, -1], [5, 7], [10, 6],
    [-2, -20], [8, 33], [9, 34], [-3, 29], [11, 17], [35, 12],
    [40, -4], [-11, 14], [36, 15], [16, 45], [-15, -5], [26, 18],
    [19, -32], [-6, 39], [-10, 21], [43, 22], [23, 57], [24, 53],
    [61, 25], [-62, -7], [-23, 27], [28, -16], [-8, -45], [30, 64],
    [-52, 31], [-72, 32], [-9, -38], [-12, 44], [-13, -30], [-14, -41],
    [37, -31], [38, -50], [-17, 75], [-18, 82], [41, -25], [-36, 42],
    [-19, -80], [-21, 48], [46, -22], [-24, 74], [51, 47], [-26, 67],
    [49, 59], [-33, 50], [65, -27], [-60, 52], [70, -28], [54, -42],
    [55, -54], [56, -64], [-29, 63], [58, -40], [81, -34], [-51, 60],
    [-35, -71], [62, -44], [92, -37], [-76, -39], [-61, -43], [66, -46],
    [-47, 77], [-81, 68], [69, -65], [-48, 78], [71, -82], [72, -92],
    [-67, 73], [-49, 84], [-53, -70], [76, -55], [-56, -83], [-57, -58],
    [-85, 79], [80, -86], [-77, -59], [-63, 90], [-90, 83], [85, -66],
    [-68, -95], [-93, 86], [87, -94], [88, -87], [89, -96], [-78, -69],
    [-73, 91], [-74, -84], [-91, -75],
];

/// Decode tree for category 2 vector codes.
pub const VECTOR_TREE_CAT2: [[i16; 2]; 47] = [
    [1, 0], [3, 2], [13, -1], [6, 4], [-8, 5], [24, -2],
    [-7, 7], [8, 10], [20, 9], [-3, -21], [11, 26], [12, 29],
    [-29, -4], [19, 14], [-14, 15], [16, -10], [35, 17], [18, -5],
    [-6, 39], [-9, -15], [-22, 21], [22, -11], [-12, 23], [-37, -13],
    [25, -16], [-17, -23], [33, 27], [-18, 28], [-35, -19], [34, 30],
    [31, -31], [-32, 32], [-20, 38], [-28, -24], [-25, -36], [36, -30],
    [37, 43], [-43, -26], [-39, -27], [40, -42], [41, -33], [42, -45],
    [44, -34], [-38, -44], [45, -46], [-40, 46], [-47, -41],
];

/// Decode tree for category 3 vector codes.
pub const VECTOR_TREE_CAT3: [[i16; 2]; 519] = [
    [2, 1], [20, 0], [7, 3], [18, 4], [-1, 5], [13, 6],
    [-2, 127], [55, 8], [17, 9], [24, 10], [11, -26], [130, 12],
    [-3, 116], [32, 14], [15, -36], [16, -127], [170, -4], [-25, -5],
    [19, 42], [-150, -6], [33, 21], [22, 27], [23, -30], [62, -7],
    [-156, 25], [132, 26], [-161, -8], [28, 404], [162, 29], [30, 40],
    [-300, 31], [191, -9], [141, -10], [-125, 34], [37, 35], [36, 52],
    [179, -11], [38, 49], [39, 108], [-12, -375], [274, 41], [-13, 215],
    [43, 325], [44, -151], [45, 88], [-56, 46], [354, 47], [-128, 48],
    [-14, 497], [50, -35], [51, 123], [-15, -80], [53, -180], [-37, 54],
    [-16, 187], [67, 56], [115, 57], [79, 58], [59, 151], [-400, 60],
    [139, 61], [-285, -17], [63, 235], [-136, 64], [65, 113], [-325, 66],
    [-381, -18], [93, 68], [69, -155], [84, 70], [71, -132], [72, 434],
    [73, -286], [174, 74], [75, -192], [183, 76], [77, 137], [78, 337],
    [-339, -19], [80, 247], [81, 326], [-205, 82], [-182, 83], [103, -20],
    [85, -181], [86, 206], [87, 260], [-141, -21], [-251, 89], [90, 197],
    [216, 91], [92, 384], [-22, -283], [94, 109], [95, 117], [-32, 96],
    [97, -51], [98, -425], [298, 99], [100, 224], [374, 101], [102, 356],
    [-23, -580], [104, -231], [105, -195], [195, 106], [259, 107], [-24, -149],
    [-256, -27], [145, 110], [331, 111], [-186, 112], [-166, -28], [114, 201],
    [-29, 295], [-126, -31], [-33, 135], [-175, 118], [122, 119], [120, -158],
    [449, 121], [-167, -34], [-38, 163], [-137, 124], [125, -401], [126, -86],
    [-39, 158], [213, 128], [129, -152], [171, -40], [-276, 131], [423, -41],
    [133, -281], [-162, 134], [-81, -42], [136, -277], [-85, -43], [138, 348],
    [-394, -44], [140, -206], [-45, -140], [-255, 142], [-61, 143], [144, -525],
    [296, -46], [146, -280], [-306, 147], [148, 328], [288, 149], [227, 150],
    [-47, -53], [152, 164], [153, -60], [154, -311], [203, 155], [372, 156],
    [182, 157], [-95, -48], [159, -316], [160, -107], [161, -520], [-49, -174],
    [-55, -50], [-191, -52], [165, 188], [-430, 166], [167, -225], [168, -105],
    [169, 347], [-54, -284], [-57, 343], [172, -257], [371, 173], [-58, -456],
    [284, 175], [176, 292], [177, 233], [178, 442], [-59, -532], [-305, 180],
    [181, 186], [-62, -165], [-63, -313], [184, 245], [426, 185], [-64, -189],
    [-65, 390], [-406, -66], [359, 189], [-287, 190], [-67, -183], [192, -376],
    [193, 323], [336, 194], [-168, -68], [196, 361], [-419, -69], [-380, 198],
    [253, 199], [200, 338], [-70, -555], [202, 410], [-71, -315], [460, 204],
    [205, 436], [-92, -72], [218, 207], [240, 208], [209, 270], [314, 210],
    [352, 211], [212, 364], [-423, -73], [-160, 214], [-75, 332], [435, -76],
    [217, 335], [-77, -235], [219, 228], [266, 220], [381, 221], [222, 282],
    [490, 223], [-78, -203], [225, 357], [226, 407], [-79, -416], [-526, -82],
    [317, 229], [230, 392], [231, 290], [492, 232], [-83, -240], [234, 452],
    [-84, -209], [-176, 236], [237, 365], [238, -260], [239, 467], [-87, -292],
    [241, 255], [279, 242], [243, 302], [494, 244], [-88, -271], [443, 246],
    [-89, -214], [-157, 248], [249, 448], [276, 250], [251, -252], [252, 419],
    [-90, -172], [349, 254], [-382, -91], [411, 256], [402, 257], [360, 258],
    [-443, -93], [-94, -219], [-153, 261], [262, 310], [395, 263], [474, 264],
    [479, 265], [-96, -542], [307, 267], [268, 321], [269, 454], [-97, -222],
    [271, 420], [272, 405], [273, 478], [-98, -223], [275, -261], [-211, -100],
    [350, 277], [278, 453], [-356, -101], [280, 385], [281, 487], [-390, -102],
    [446, 283], [-578, -103], [285, 304], [369, 286], [287, 509], [-104, -229],
    [339, 289], [-106, -327], [451, 291], [-583, -108], [293, 470], [294, 510],
    [-109, -234], [-110, -385], [493, 297], [-188, -111], [299, 416], [430, 300],
    [301, 340], [-112, -267], [502, 303], [-113, -238], [305, 455], [306, 465],
    [-115, -605], [308, 362], [309, 433], [-516, -116], [378, 311], [312, 472],
    [313, 400], [-467, -117], [315, 341], [377, 316], [-468, -118], [387, 318],
    [484, 319], [495, 320], [-120, -445], [322, 499], [-121, -245], [324, 334],
    [-129, -196], [-131, -130], [-185, 327], [427, -133], [329, -210], [355, 330],
    [-134, -236], [-200, -135], [333, 346], [-262, -138], [-139, 391], [-212, -142],
    [-436, -143], [-144, -269], [-145, -253], [-266, -146], [-217, -147], [401, 342],
    [-148, -273], [-326, 344], [345, -216], [-154, -159], [-163, 483], [-556, -164],
    [-169, -294], [-170, -427], [351, 376], [-171, -377], [444, 353], [-173, -298],
    [-177, -187], [-178, -355], [-365, -179], [358, 409], [-321, -184], [-190, -310],
    [-193, -318], [-194, -319], [363, 445], [-552, -197], [-198, -323], [-201, 366],
    [367, 424], [368, 491], [-506, -202], [370, 447], [-412, -204], [-207, -312],
    [373, 408], [-536, -208], [375, 429], [-415, -213], [-215, -290], [-218, -343],
    [414, 379], [380, 457], [-567, -220], [398, 382], [489, 383], [-582, -221],
    [-226, -550], [386, 515], [-538, -227], [388, 458], [389, 506], [-228, -353],
    [-258, -230], [-232, -357], [393, 468], [394, 508], [-233, -358], [396, 462],
    [501, 397], [-345, -237], [432, 399], [-241, -403], [-242, -367], [-243, -512],
    [403, 507], [-246, -418], [-250, -275], [406, 511], [-254, -379], [-259, -384],
    [-263, -351], [-264, 503], [-265, -411], [412, 476], [464, 413], [-446, -268],
    [415, 496], [-270, -521], [417, 440], [418, 466], [-272, -451], [-278, -531],
    [421, 437], [422, 482], [-465, -279], [-500, -282], [450, 425], [-317, -288],
    [-289, -414], [428, 481], [-336, -291], [-338, -293], [431, 500], [-295, -437],
    [-420, -296], [-297, -422], [-301, 439], [-302, -505], [-460, -303], [504, 438],
    [-304, -429], [-431, -307], [441, 498], [-383, -308], [-309, -434], [-314, -439],
    [-398, -320], [-322, -447], [-328, -453], [-329, -454], [-330, -405], [-331, -335],
    [-332, -387], [-333, -458], [-334, -459], [-350, -337], [-347, -340], [456, 486],
    [-341, -361], [-557, -342], [516, 459], [-346, -508], [461, 488], [-360, -352],
    [463, 518], [-362, -487], [-363, -491], [-509, -366], [-378, -575], [-386, -410],
    [517, 469], [-388, -513], [471, 512], [-562, -389], [473, 480], [-475, -391],
    [475, 514], [-471, -392], [477, 505], [-393, -518], [-395, -470], [-396, -586],
    [-566, -397], [-402, -426], [-404, -529], [-530, -407], [513, 485], [-565, -408],
    [-409, -534], [-440, -413], [-537, -417], [-528, -421], [-428, -553], [-535, -432],
    [-433, -558], [-501, -435], [-438, -563], [-533, -441], [-581, -442], [-455, -450],
    [-452, -510], [-457, -503], [-461, -481], [-462, -587], [-511, -463], [-540, -466],
    [-476, -551], [-477, -502], [-478, -600], [-543, -480], [-483, -482], [-485, -490],
    [-576, -486], [-504, -561], [-541, -507], [-560, -515], [-517, -590], [-546, -527],
    [-545, -601], [-585, -577], [-591, -606],
];

/// Decode tree for category 4 vector codes.
pub const VECTOR_TREE_CAT4: [[i16; 2]; 208] = [
    [1, 4], [2, 0], [3, 15], [63, -1], [12, 5], [6, 14],
    [62, 7], [-17, 8], [-2, 9], [10, -100], [11, 29], [-3, 153],
    [13, 22], [30, -4], [26, -5], [-64, 16], [17, 152], [18, -69],
    [-6, 19], [20, 85], [-73, 21], [41, -7], [-16, 23], [24, -65],
    [25, 54], [-8, 77], [-68, 27], [28, 45], [-9, 87], [40, -10],
    [-20, 31], [32, 56], [33, -144], [34, -22], [35, -70], [36, -40],
    [-12, 37], [38, -212], [-76, 39], [-11, -44], [97, -13], [86, 42],
    [43, -98], [44, -130], [-14, -56], [46, -25], [-88, 47], [-26, 48],
    [49, -104], [98, 50], [51, -136], [52, 83], [106, 53], [-15, -79],
    [55, -32], [-18, -101], [120, 57], [-148, 58], [59, -82], [-192, 60],
    [-28, 61], [-19, 81], [-21, -84], [-80, 64], [65, 71], [-128, 66],
    [-96, 67], [-132, 68], [-160, 69], [70, 73], [160, -23], [72, 95],
    [96, -24], [126, 74], [163, 75], [148, 76], [-27, -91], [78, 102],
    [113, 79], [142, 80], [-112, -29], [82, 191], [-120, -30], [84, -194],
    [-31, -95], [-33, -97], [-34, 104], [-89, 88], [-133, 89], [137, 90],
    [109, 91], [134, 92], [93, 175], [94, 119], [-35, -241], [181, -36],
    [-37, -66], [-38, -90], [99, 116], [107, 100], [101, 167], [-215, -39],
    [103, 144], [-41, 147], [115, 105], [-42, -106], [-43, -107], [197, 108],
    [-45, -151], [131, 110], [150, 111], [162, 112], [-46, -110], [-208, 114],
    [-48, 124], [-57, -49], [129, 117], [184, 118], [-50, -155], [-163, -51],
    [157, 121], [122, -72], [165, 123], [183, -52], [161, 125], [-193, -53],
    [198, 127], [190, 128], [-54, -138], [130, 185], [-55, -119], [168, 132],
    [192, 133], [-58, -122], [188, 135], [136, 205], [-244, -60], [138, 170],
    [-197, 139], [-209, 140], [141, 203], [-181, -61], [143, -161], [-152, -67],
    [145, -164], [146, -116], [-71, 158], [-74, 149], [-141, -75], [-77, -150],
    [151, 186], [-124, -78], [-81, -85], [154, -105], [-153, 155], [156, -117],
    [-113, -83], [-86, -149], [159, -213], [-87, 174], [-134, -92], [-93, -168],
    [-94, -158], [177, 164], [-147, -99], [-165, 166], [-196, -102], [-103, -167],
    [169, 201], [-108, -154], [178, 171], [172, 195], [173, 200], [-109, -118],
    [-114, -178], [176, 182], [-115, -221], [-121, -131], [179, 193], [180, 187],
    [-205, -125], [-129, -145], [-229, -135], [-137, -146], [-139, -226], [-140, -162],
    [-142, -201], [-156, -220], [189, 202], [-157, -200], [-225, -166], [-224, -169],
    [-185, -170], [194, 207], [-233, -172], [196, 204], [-176, -173], [-199, -177],
    [199, 206], [-180, -228], [-182, -217], [-218, -184], [-240, -195], [-245, -198],
    [-202, -204], [-210, -211], [-232, -214], [-216, -230],
];

/// Decode tree for category 5 vector codes.
pub const VECTOR_TREE_CAT5: [[i16; 2]; 191] = [
    [1, 4], [0, 2], [3, 11], [-1, -81], [5, 13], [6, 35],
    [7, -3], [-108, 8], [9, -84], [-111, 10], [-112, -2], [36, 12],
    [-4, 26], [20, 14], [88, 15], [16, -28], [17, -85], [18, 19],
    [-121, -5], [38, -6], [40, 21], [-36, 22], [-117, 23], [59, 24],
    [25, 52], [-7, 149], [81, 27], [-93, 28], [-118, 29], [30, -18],
    [-63, 31], [-33, 32], [33, 173], [34, -100], [-8, -139], [-27, -9],
    [37, 80], [47, -10], [116, 39], [93, -11], [41, -12], [42, -13],
    [-91, 43], [44, 103], [67, 45], [-21, 46], [-144, -14], [48, -37],
    [-94, 49], [50, 82], [-15, 51], [-16, 92], [73, 53], [54, 63],
    [99, 55], [70, 56], [57, 79], [87, 58], [-17, -98], [-162, 60],
    [61, -189], [62, -45], [120, -19], [158, 64], [-38, 65], [66, 138],
    [-20, -216], [97, 68], [-29, 69], [91, -22], [71, 107], [131, 72],
    [-23, -104], [85, 74], [112, 75], [76, 127], [77, 118], [141, 78],
    [-24, -191], [96, -25], [-90, -30], [-109, -31], [83, -135], [-48, 84],
    [-57, -32], [86, 132], [-138, -34], [-35, -116], [-82, 89], [-39, 90],
    [-120, -40], [-41, 130], [-86, -42], [94, 126], [95, 164], [-97, -43],
    [-44, -125], [145, 98], [-46, -66], [100, 109], [101, 174], [102, 122],
    [-47, -128], [-54, 104], [105, 179], [155, 106], [-49, -102], [108, 148],
    [-50, -131], [110, 139], [121, 111], [-51, -177], [123, 113], [136, 114],
    [115, 169], [-52, -133], [-83, 117], [-55, 165], [119, 184], [-56, -137],
    [-58, -192], [-59, -140], [-219, -60], [124, 182], [125, 171], [-61, -142],
    [-136, -64], [180, 128], [129, 157], [-65, -146], [-175, -67], [-68, -149],
    [133, 142], [162, 134], [135, 172], [-184, -69], [137, 160], [-70, -151],
    [-145, -72], [140, 161], [-176, -73], [-164, -75], [143, 177], [144, 159],
    [-76, -157], [147, 146], [-87, -115], [-126, -88], [-210, -89], [150, 152],
    [151, -163], [-92, 167], [-99, 153], [154, -114], [-119, -95], [156, -165],
    [-96, -113], [-204, -101], [-103, -110], [-141, -105], [-156, -106], [-122, -203],
    [170, 163], [-123, -228], [-124, -201], [166, 168], [-127, -172], [187, -129],
    [-147, -130], [-132, -150], [-148, -229], [-207, -153], [-154, -211], [-174, -166],
    [175, 176], [-167, -226], [-168, -194], [178, 189], [-169, -220], [-171, 186],
    [181, 185], [-173, -195], [183, 190], [-178, -225], [-183, -180], [-181, -200],
    [-190, -198], [-199, 188], [-202, -193], [-217, -196], [-208, -205],
];

/// Decode tree for category 6 vector codes.
pub const VECTOR_TREE_CAT6: [[i16; 2]; 31] = [
    [1, 0], [2, 7], [3, 4], [5, -1], [-16, -2], [6, 12],
    [13, -3], [8, 9], [-8, -4], [10, 15], [19, 11], [17, -5],
    [-24, -6], [-9, 14], [25, -7], [16, 24], [-10, -20], [18, 22],
    [-11, -26], [-12, 20], [26, 21], [-14, -13], [23, -25], [28, -15],
    [-17, -18], [-19, -22], [27, -28], [-21, 29], [-30, -23], [-27, 30],
    [-29, -31],
];

/// Highest quantizer bin per category.
pub const CATEGORY_MAX_BIN: [i16; 8] = [13, 9, 6, 4, 3, 2, 1, 0];
/// Coefficients per coded vector, by category.
pub const VECTOR_DIMENSION: [i16; 8] = [2, 2, 2, 4, 4, 5, 5, 1];
/// Coded vectors per region, by category.
pub const VECTORS_PER_REGION: [i16; 8] = [10, 10, 10, 5, 5, 4, 4, 20];
/// Expected bit cost per region for the allocation search.
pub const EXPECTED_CATEGORY_BITS: [i16; 8] = [52, 47, 43, 37, 29, 22, 16, 0];

/// Code and width tables for one coding category.
pub fn vector_codes(category: usize) -> (&'static [i16], &'static [i16]) {
    match category {
        0 => (&VECTOR_CODES_CAT0, &VECTOR_WIDTHS_CAT0),
        1 => (&VECTOR_CODES_CAT1, &VECTOR_WIDTHS_CAT1),
        2 => (&VECTOR_CODES_CAT2, &VECTOR_WIDTHS_CAT2),
        3 => (&VECTOR_CODES_CAT3, &VECTOR_WIDTHS_CAT3),
        4 => (&VECTOR_CODES_CAT4, &VECTOR_WIDTHS_CAT4),
        5 => (&VECTOR_CODES_CAT5, &VECTOR_WIDTHS_CAT5),
        6 => (&VECTOR_CODES_CAT6, &VECTOR_WIDTHS_CAT6),
        _ => unreachable!("category {} carries no vector codes", category),
    }
}

/// Decode tree for one coding category.
pub fn vector_tree(category: usize) -> &'static [[i16; 2]] {
    match category {
        0 => &VECTOR_TREE_CAT0,
        1 => &VECTOR_TREE_CAT1,
        2 => &VECTOR_TREE_CAT2,
        3 => &VECTOR_TREE_CAT3,
        4 => &VECTOR_TREE_CAT4,
        5 => &VECTOR_TREE_CAT5,
        6 => &VECTOR_TREE_CAT6,
        _ => unreachable!("category {} carries no vector codes", category),
    }
}
