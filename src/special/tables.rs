//! Exact factorial, double factorial and Bernoulli tables.

/// `FACTORIALS[i] = i!`, correctly rounded, for every `i` whose factorial is a
/// finite `f64` (170! is the last).
pub(crate) const FACTORIALS: [f64; 171] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    1.21645100408832e+17,
    2.43290200817664e+18,
    5.109094217170944e+19,
    1.1240007277776077e+21,
    2.585201673888498e+22,
    6.204484017332394e+23,
    1.5511210043330986e+25,
    4.0329146112660565e+26,
    1.0888869450418352e+28,
    3.0488834461171387e+29,
    8.841761993739702e+30,
    2.6525285981219107e+32,
    8.222838654177922e+33,
    2.631308369336935e+35,
    8.683317618811886e+36,
    2.9523279903960416e+38,
    1.0333147966386145e+40,
    3.7199332678990125e+41,
    1.3763753091226346e+43,
    5.230226174666011e+44,
    2.0397882081197444e+46,
    8.159152832478977e+47,
    3.345252661316381e+49,
    1.40500611775288e+51,
    6.041526306337383e+52,
    2.658271574788449e+54,
    1.1962222086548019e+56,
    5.502622159812089e+57,
    2.5862324151116818e+59,
    1.2413915592536073e+61,
    6.082818640342675e+62,
    3.0414093201713376e+64,
    1.5511187532873822e+66,
    8.065817517094388e+67,
    4.2748832840600255e+69,
    2.308436973392414e+71,
    1.2696403353658276e+73,
    7.109985878048635e+74,
    4.0526919504877214e+76,
    2.3505613312828785e+78,
    1.3868311854568984e+80,
    8.32098711274139e+81,
    5.075802138772248e+83,
    3.146997326038794e+85,
    1.98260831540444e+87,
    1.2688693218588417e+89,
    8.247650592082472e+90,
    5.443449390774431e+92,
    3.647111091818868e+94,
    2.4800355424368305e+96,
    1.711224524281413e+98,
    1.1978571669969892e+100,
    8.504785885678623e+101,
    6.1234458376886085e+103,
    4.4701154615126844e+105,
    3.307885441519386e+107,
    2.48091408113954e+109,
    1.8854947016660504e+111,
    1.4518309202828587e+113,
    1.1324281178206297e+115,
    8.946182130782976e+116,
    7.156945704626381e+118,
    5.797126020747368e+120,
    4.753643337012842e+122,
    3.945523969720659e+124,
    3.314240134565353e+126,
    2.81710411438055e+128,
    2.4227095383672734e+130,
    2.107757298379528e+132,
    1.8548264225739844e+134,
    1.650795516090846e+136,
    1.4857159644817615e+138,
    1.352001527678403e+140,
    1.2438414054641308e+142,
    1.1567725070816416e+144,
    1.087366156656743e+146,
    1.032997848823906e+148,
    9.916779348709496e+149,
    9.619275968248212e+151,
    9.426890448883248e+153,
    9.332621544394415e+155,
    9.332621544394415e+157,
    9.42594775983836e+159,
    9.614466715035127e+161,
    9.90290071648618e+163,
    1.0299016745145628e+166,
    1.081396758240291e+168,
    1.1462805637347084e+170,
    1.226520203196138e+172,
    1.324641819451829e+174,
    1.4438595832024937e+176,
    1.588245541522743e+178,
    1.7629525510902446e+180,
    1.974506857221074e+182,
    2.2311927486598138e+184,
    2.5435597334721877e+186,
    2.925093693493016e+188,
    3.393108684451898e+190,
    3.969937160808721e+192,
    4.684525849754291e+194,
    5.574585761207606e+196,
    6.689502913449127e+198,
    8.094298525273444e+200,
    9.875044200833601e+202,
    1.214630436702533e+205,
    1.506141741511141e+207,
    1.882677176888926e+209,
    2.372173242880047e+211,
    3.0126600184576594e+213,
    3.856204823625804e+215,
    4.974504222477287e+217,
    6.466855489220474e+219,
    8.47158069087882e+221,
    1.1182486511960043e+224,
    1.4872707060906857e+226,
    1.9929427461615188e+228,
    2.6904727073180504e+230,
    3.659042881952549e+232,
    5.012888748274992e+234,
    6.917786472619489e+236,
    9.615723196941089e+238,
    1.3462012475717526e+241,
    1.898143759076171e+243,
    2.695364137888163e+245,
    3.854370717180073e+247,
    5.5502938327393044e+249,
    8.047926057471992e+251,
    1.1749972043909107e+254,
    1.727245890454639e+256,
    2.5563239178728654e+258,
    3.80892263763057e+260,
    5.713383956445855e+262,
    8.62720977423324e+264,
    1.3113358856834524e+267,
    2.0063439050956823e+269,
    3.0897696138473508e+271,
    4.789142901463394e+273,
    7.471062926282894e+275,
    1.1729568794264145e+278,
    1.853271869493735e+280,
    2.9467022724950384e+282,
    4.7147236359920616e+284,
    7.590705053947219e+286,
    1.2296942187394494e+289,
    2.0044015765453026e+291,
    3.287218585534296e+293,
    5.423910666131589e+295,
    9.003691705778438e+297,
    1.503616514864999e+300,
    2.5260757449731984e+302,
    4.269068009004705e+304,
    7.257415615307999e+306,
];

/// `DOUBLE_FACTORIALS[i] = i!!`, correctly rounded, up to 300!! (the last
/// finite `f64`).
pub(crate) const DOUBLE_FACTORIALS: [f64; 301] = [
    1.0,
    1.0,
    2.0,
    3.0,
    8.0,
    15.0,
    48.0,
    105.0,
    384.0,
    945.0,
    3840.0,
    10395.0,
    46080.0,
    135135.0,
    645120.0,
    2027025.0,
    10321920.0,
    34459425.0,
    185794560.0,
    654729075.0,
    3715891200.0,
    13749310575.0,
    81749606400.0,
    316234143225.0,
    1961990553600.0,
    7905853580625.0,
    51011754393600.0,
    213458046676875.0,
    1428329123020800.0,
    6190283353629375.0,
    4.2849873690624e+16,
    1.9189878396251062e+17,
    1.371195958099968e+18,
    6.33265987076285e+18,
    4.662066257539891e+19,
    2.2164309547669976e+20,
    1.6783438527143608e+21,
    8.200794532637892e+21,
    6.377706640314571e+22,
    3.1983098677287775e+23,
    2.5510826561258285e+24,
    1.3113070457687988e+25,
    1.071454715572848e+26,
    5.638620296805835e+26,
    4.714400748520531e+27,
    2.5373791335626256e+28,
    2.1686243443194444e+29,
    1.1925681927744342e+30,
    1.0409396852733332e+31,
    5.843584144594727e+31,
    5.204698426366666e+32,
    2.980227913743311e+33,
    2.7064431817106665e+34,
    1.5795207942839547e+35,
    1.4614793181237598e+36,
    8.687364368561751e+36,
    8.184284181493056e+37,
    4.951797690080198e+38,
    4.746884825265972e+39,
    2.921560637147317e+40,
    2.8481308951595834e+41,
    1.7821519886598634e+42,
    1.7658411549989415e+43,
    1.1227557528557138e+44,
    1.1301383391993226e+45,
    7.29791239356214e+45,
    7.458913038715529e+46,
    4.889601303686634e+47,
    5.07206086632656e+48,
    3.3738248995437775e+49,
    3.550442606428592e+50,
    2.395415678676082e+51,
    2.5563186766285865e+52,
    1.7486534454335398e+53,
    1.891675820705154e+54,
    1.3114900840751548e+55,
    1.437673623735917e+56,
    1.0098473647378693e+57,
    1.1213854265140152e+58,
    7.977794181429167e+58,
    8.97108341211212e+59,
    6.462013286957625e+60,
    7.35628839793194e+61,
    5.363471028174829e+62,
    6.1792822542628295e+63,
    4.558950373948605e+64,
    5.314182738666033e+65,
    3.9662868253352865e+66,
    4.6764808100261093e+67,
    3.529995274548405e+68,
    4.208832729023498e+69,
    3.212295699839048e+70,
    3.8721261107016185e+71,
    2.987435000850315e+72,
    3.639798544059521e+73,
    2.838063250807799e+74,
    3.4942066022971404e+75,
    2.7529213532835652e+76,
    3.4243224702511974e+77,
    2.7253921397507295e+78,
    3.4243224702511973e+79,
    2.7526460611482366e+80,
    3.4928089196562214e+81,
    2.835225442982684e+82,
    3.6325212764424704e+83,
    2.976986715131818e+84,
    3.8504725530290186e+85,
    3.185375785191045e+86,
    4.15851035727134e+87,
    3.4720596058582394e+88,
    4.5743613929984744e+89,
    3.8539861625026457e+90,
    5.123284760158291e+91,
    4.3550043636279895e+92,
    5.840544626580451e+93,
    5.008255018172188e+94,
    6.775031766833324e+95,
    5.85965837126146e+96,
    7.994537484863323e+97,
    6.972993461801137e+98,
    9.593444981835987e+99,
    8.437322088779376e+100,
    1.1704002877839905e+102,
    1.0377906169198634e+103,
    1.4512963568521482e+104,
    1.297238271149829e+105,
    1.8286334096337066e+106,
    1.647492604360283e+107,
    2.3406507643311445e+108,
    2.1252654596247653e+109,
    3.042845993630488e+110,
    2.784097752108442e+111,
    4.016556711592244e+112,
    3.7028500103042284e+113,
    5.382185993533607e+114,
    4.998847513910708e+115,
    7.319772951205705e+116,
    6.84842109405767e+117,
    1.0101286672663872e+119,
    9.519305320740162e+119,
    1.4141801341729423e+121,
    1.3422220502243628e+122,
    2.008135790525578e+123,
    1.9193775318208388e+124,
    2.8917155383568322e+125,
    2.783097421140216e+126,
    4.2219046860009753e+127,
    4.091153209076118e+128,
    6.248418935281443e+129,
    6.095818281523415e+130,
    9.372628402922166e+131,
    9.204685605100357e+132,
    1.4246395172441692e+134,
    1.4083168975803547e+135,
    2.1939448565560204e+136,
    2.1828911912495497e+137,
    3.4225539762273915e+138,
    3.4271391702617933e+139,
    5.407635282439279e+140,
    5.4491512807162513e+141,
    8.652216451902847e+142,
    8.773133561953163e+143,
    1.401659065208261e+145,
    1.4300207705983658e+146,
    2.2987208669415484e+147,
    2.3595342714873035e+148,
    3.81587663912297e+149,
    3.940422233383797e+150,
    6.41067275372659e+151,
    6.659313574418617e+152,
    1.0898143681335202e+154,
    1.1387426212255834e+155,
    1.874480713189655e+156,
    1.9700247347202593e+157,
    3.2615964409499996e+158,
    3.4475432857604537e+159,
    5.740409736071999e+160,
    6.102151615796004e+161,
    1.0217929330208158e+163,
    1.0922851392274846e+164,
    1.8392272794374685e+165,
    1.9770361020017472e+166,
    3.3473936485761925e+167,
    3.617976066663197e+168,
    6.159204313380195e+169,
    6.693255723326915e+170,
    1.1456120022887162e+172,
    1.2516388202621332e+173,
    2.1537505643027864e+174,
    2.3655973702954314e+175,
    4.092126072175294e+176,
    4.518290977264274e+177,
    7.856882058576564e+178,
    8.72030158612005e+179,
    1.5242351193638536e+181,
    1.7004588092934096e+182,
    2.987500833953153e+183,
    3.349903854308017e+184,
    5.915251651227243e+185,
    6.666308670072953e+186,
    1.1830503302454486e+188,
    1.3399280426846636e+189,
    2.3897616670958062e+190,
    2.7200539266498673e+191,
    4.875113800875445e+192,
    5.576110549632228e+193,
    1.0042734429803416e+195,
    1.1542548837738713e+196,
    2.0888887613991106e+197,
    2.412392707087391e+198,
    4.386666398938132e+199,
    5.090148611954395e+200,
    9.29973276574884e+201,
    1.0842016543462861e+203,
    1.9901428118702518e+204,
    2.331033556844515e+205,
    4.298708473639744e+206,
    5.0583428183525975e+207,
    9.371184472534642e+208,
    1.107777077219219e+210,
    2.0616605839576212e+211,
    2.448187340654474e+212,
    4.5768864963859186e+213,
    5.459457769659476e+214,
    1.0252225751904458e+216,
    1.228377998173382e+217,
    2.3170030199304077e+218,
    2.7884180558535774e+219,
    5.282766885441329e+220,
    6.3854773479046924e+221,
    1.2150363836515058e+223,
    1.475045267365984e+224,
    2.818884410071493e+225,
    3.436855472962743e+226,
    6.5961895195672945e+227,
    8.076610361462445e+228,
    1.5567007266178815e+230,
    1.9141566556665996e+231,
    3.704947729350558e+232,
    4.574834407043173e+233,
    8.891874550441339e+234,
    1.1025350920974046e+236,
    2.151833641206804e+237,
    2.6791602737966934e+238,
    5.2504740845446015e+239,
    6.563942670801899e+240,
    1.291616624797972e+242,
    1.6212938396880689e+243,
    3.203209229498971e+244,
    4.037021660823292e+245,
    8.008023073747427e+246,
    1.0132924368666462e+248,
    2.0180218145843514e+249,
    2.563629865272615e+250,
    5.125775409044253e+251,
    6.5372561564451684e+252,
    1.3121985047153287e+254,
    1.6800748322064082e+255,
    3.385472142165548e+256,
    4.3513938154145973e+257,
    8.802227569630426e+258,
    1.1357137858232099e+260,
    2.3061836232431714e+261,
    2.986927256715042e+262,
    6.088324765361972e+263,
    7.9153572302948615e+264,
    1.6194943875862846e+266,
    2.113400380488728e+267,
    4.340244958731243e+268,
    5.685047023514678e+269,
    1.1718661388574355e+271,
    1.5406477433724777e+272,
    3.187475897692225e+273,
    4.205968339406864e+274,
    8.733683959676696e+275,
    1.1566412933368878e+277,
    2.410496772870768e+278,
    3.203896382543179e+279,
    6.701181028580735e+280,
    8.938870907295469e+281,
    1.876330688002606e+283,
    2.5118227249500268e+284,
    5.291252540167348e+285,
    7.108458311608576e+286,
    1.502715721407527e+288,
    2.025910618808444e+289,
    4.2977669632255275e+290,
    5.814363475980234e+291,
    1.2377568854089517e+293,
    1.6803510445582878e+294,
    3.58949496768596e+295,
    4.889821539664618e+296,
    1.0481325305643003e+298,
    1.432717711121733e+299,
    3.081509639859043e+300,
    4.226517247809112e+301,
    9.121268533982767e+302,
    1.2552756225993064e+304,
    2.718138023126865e+305,
    3.753274111571926e+306,
    8.154414069380594e+307,
];

/// `B_{2k} / (2k)!` for k = 1..=20.
pub(crate) const BERNOULLI_OVER_FACTORIAL: [f64; 20] = [
    0.08333333333333333,
    -0.001388888888888889,
    3.306878306878307e-05,
    -8.267195767195768e-07,
    2.08767569878681e-08,
    -5.284190138687493e-10,
    1.3382536530684679e-11,
    -3.3896802963225827e-13,
    8.586062056277845e-15,
    -2.174868698558062e-16,
    5.5090028283602295e-18,
    -1.3954464685812522e-19,
    3.534707039629467e-21,
    -8.953517427037546e-23,
    2.267952452337683e-24,
    -5.744790668872202e-26,
    1.455172475614865e-27,
    -3.6859949406653103e-29,
    9.336734257095045e-31,
    -2.36502241570063e-32,
];

/// ζ(k) for k = 2..=31.
pub(crate) const ZETA_INTEGERS: [f64; 30] = [
    1.6449340668482264,
    1.2020569031595942,
    1.0823232337111381,
    1.03692775514337,
    1.0173430619844492,
    1.008349277381923,
    1.0040773561979444,
    1.0020083928260821,
    1.000994575127818,
    1.0004941886041194,
    1.000246086553308,
    1.0001227133475785,
    1.0000612481350588,
    1.000030588236307,
    1.0000152822594086,
    1.0000076371976379,
    1.000003817293265,
    1.0000019082127165,
    1.0000009539620338,
    1.0000004769329869,
    1.0000002384505027,
    1.000000119219926,
    1.000000059608189,
    1.0000000298035034,
    1.0000000149015549,
    1.0000000074507118,
    1.000000003725334,
    1.0000000018626598,
    1.0000000009313275,
    1.0000000004656628,
];

/// Coefficients of Temme's uniform expansion of Q(a, x) for large a:
/// row k holds the Taylor coefficients of C_k(η) in powers of η.
pub(crate) const TEMME_COEFFS: [&[f64]; 7] = [
    &[
        -0.3333333333333333,
        0.08333333333333333,
        -0.014814814814814815,
        0.0011574074074074073,
        0.0003527336860670194,
        -0.0001787551440329218,
        3.919263178522438e-05,
        -2.185448510679992e-06,
        -1.85406221071516e-06,
        8.296711340953087e-07,
        -1.7665952736826078e-07,
        6.707853543401498e-09,
        1.0261809784240309e-08,
        -4.382036018453353e-09,
        9.14769958223679e-10,
    ],
    &[
        -0.001851851851851852,
        -0.003472222222222222,
        0.0026455026455026454,
        -0.0009902263374485596,
        0.00020576131687242798,
        -4.018775720164609e-07,
        -1.8098550334489977e-05,
        7.64916091608111e-06,
        -1.6120900894563446e-06,
        4.647127802807434e-09,
        1.378633446915721e-07,
        -5.752545603517705e-08,
        1.1951628599778148e-08,
    ],
    &[
        0.004133597883597883,
        -0.0026813271604938273,
        0.0007716049382716049,
        2.0093878600823047e-06,
        -0.0001073665322636516,
        5.2923448829120125e-05,
        -1.2760635188618728e-05,
        3.423578734096138e-08,
        1.3721957309062934e-06,
        -6.298992138380055e-07,
        1.4280614206064242e-07,
    ],
    &[
        0.0006494341563786008,
        0.00022947209362139917,
        -0.0004691894943952557,
        0.00026772063206283885,
        -7.561801671883977e-05,
        -2.396505113867297e-07,
        1.1082654115347302e-05,
        -5.6749528269915965e-06,
        1.4230900732435883e-06,
    ],
    &[
        -0.0008618882909167117,
        0.0007840392217200666,
        -0.0002990724803031902,
        -1.4638452578843418e-06,
        6.641498215465122e-05,
        -3.968365047179435e-05,
        1.1375726970678419e-05,
    ],
    &[
        -0.00033679855336635813,
        -6.972813758365857e-05,
        0.0002772753244959392,
        -0.00019932570516188847,
        6.797780477937208e-05,
    ],
    &[
        0.0005313079364639922,
        -0.0005921664373536939,
        0.0002708782096718045,
    ],
];
