use cutcell_f64::cell::{cube_index, quad_index};
use cutcell_f64::{
    cube_interface_area, cube_measures, cube_volume_fraction, quad_area_fraction,
    quad_interface_length, quad_measures,
};

use crate::{cube_pattern, quad_pattern};

// Sample magnitudes of the regression tables. Pattern bit `i` negates sample `i`.
pub const MAGNITUDES: [f64; 8] = [0.3, 0.7, 0.45, 0.9, 0.15, 0.6, 0.25, 0.8];

// (pattern, volume fraction, interface area)
#[rustfmt::skip]
const CUBE_REGRESSION: [(usize, f64, f64); 256] = [
    (0, 0.0, 0.0),
    (1, 0.0083333333333333332, 0.13546473505840717),
    (2, 0.038238573021181721, 0.32827092159749044),
    (3, 0.15003716090672614, 0.78375206517977214),
    (4, 0.013975155279503106, 0.1776305214124623),
    (5, 0.022308488612836439, 0.31309525647086944),
    (6, 0.12844932844932846, 0.81495849913829754),
    (7, 0.39926739926739929, 1.3383038720503049),
    (8, 0.044117647058823518, 0.3647681398474254),
    (9, 0.11862745098039214, 0.80268632487816549),
    (10, 0.082356220080005232, 0.69303906144491578),
    (11, 0.42044287057074781, 1.1831545912360633),
    (12, 0.18845907928388744, 0.85454104516623841),
    (13, 0.40131327893476232, 1.328278650289022),
    (14, 0.43431103210514976, 1.1742671887063634),
    (15, 0.61448682036917335, 1.014653003836937),
    (16, 0.0017543859649122805, 0.045309373930333185),
    (17, 0.026096491228070173, 0.32339599960325527),
    (18, 0.039992958986094, 0.37358029552782362),
    (19, 0.23868597077979231, 1.06511629500375),
    (20, 0.015729541244415387, 0.22293989534279549),
    (21, 0.040071646507573278, 0.50102652101571754),
    (22, 0.13020371441424075, 0.86026787306863073),
    (23, 0.38800848274532485, 1.5986632892151245),
    (24, 0.045872033023735805, 0.41007751377775853),
    (25, 0.27339181286549702, 1.1128179174966724),
    (26, 0.084110606044917519, 0.73834843537524897),
    (27, 0.49936837963490266, 1.2956895222178162),
    (28, 0.19021346524879973, 0.8998504190965716),
    (29, 0.40834086495009903, 1.5953446907525175),
    (30, 0.43131428684834261, 1.21953041853526),
    (31, 0.64762868710237131, 1.1271544850268556),
    (32, 0.04343891402714932, 0.3746212845754282),
    (33, 0.051772247360482651, 0.51008601963383537),
    (34, 0.24748508098891731, 0.99967908155534901),
    (35, 0.39834470019892015, 1.1757723537335529),
    (36, 0.057414069306652424, 0.55225180598789048),
    (37, 0.065747402639985755, 0.68771654104629765),
    (38, 0.44939309056956112, 1.2399269543444267),
    (39, 0.51115779645191406, 1.3136282147542058),
    (40, 0.087556561085972845, 0.7393894244228536),
    (41, 0.16206636500754146, 1.1773076094535937),
    (42, 0.29160272804774079, 1.3644472214027745),
    (43, 0.61965520507720007, 1.5320584134808064),
    (44, 0.23189799331103678, 1.2291623297416667),
    (45, 0.45562175817930295, 1.7028219476653694),
    (46, 0.61757085187015981, 1.5660982772925292),
    (47, 0.76479925303454721, 0.98928958641659903),
    (48, 0.075216321346352311, 0.62493958706952102),
    (49, 0.26588969595935535, 1.1978701418815909),
    (50, 0.33747924799210299, 1.1350049305480576),
    (51, 0.44639251581639527, 1.1054189446423845),
    (52, 0.089191476625855415, 0.80257010848198329),
    (53, 0.28540783766419786, 1.3755206624877263),
    (54, 0.50228266745294603, 1.3683269101897111),
    (55, 0.56378077546808203, 1.2430801351936438),
    (56, 0.11933396840517585, 0.98970772691694653),
    (57, 0.45644333306872009, 1.9311893707502217),
    (58, 0.3794611208327725, 1.4997125574183523),
    (59, 0.63716516354825692, 1.3367809870386012),
    (60, 0.29074533791689533, 1.4844468281929235),
    (61, 0.48688363393236195, 2.3288867301655172),
    (62, 0.58290395105410586, 1.7158367997613295),
    (63, 0.89337747482894092, 0.73120503103683598),
    (64, 0.0041683340002667728, 0.076106062698594129),
    (65, 0.012501667333600107, 0.21157079775700133),
    (66, 0.042406907021448503, 0.4043769842960846),
    (67, 0.15420549490699292, 0.85985812787836635),
    (68, 0.048938415946088581, 0.44724989362240936),
    (69, 0.057271749279421913, 0.58271462868081647),
    (70, 0.30147956618544852, 1.1517499186846385),
    (71, 0.46935526347291057, 1.6136587974682619),
    (72, 0.048285981059090301, 0.4408742025460195),
    (73, 0.12279578498065893, 0.87879238757675959),
    (74, 0.086524554080272015, 0.76914512414350988),
    (75, 0.43011976250924011, 1.2592907147060339),
    (76, 0.33109040717736371, 1.2014207168278768),
    (77, 0.43303614711016547, 1.6210577722898865),
    (78, 0.50126499317675788, 1.2938969772147795),
    (79, 0.65779645191409908, 1.1341570317754797),
    (80, 0.0059227199651790529, 0.12141543662892734),
    (81, 0.030264825228336945, 0.39950206230184943),
    (82, 0.044161292986360776, 0.44968635822641778),
    (83, 0.24482578867373975, 1.1412246967941999),
    (84, 0.050692801911000854, 0.49255926755274254),
    (85, 0.075846826144645496, 0.77064546997322925),
    (86, 0.30398809996333215, 1.197059460931317),
    (87, 0.30565185588405397, 1.7732207038465129),
    (88, 0.05004036702400258, 0.48618357647635269),
    (89, 0.27095539970374116, 1.1892364768165247),
    (90, 0.088278940045184301, 0.81445449807384307),
    (91, 0.5035367136351695, 1.3717955849164103),
    (92, 0.33861180582970385, 1.2465969449394461),
    (93, 0.34441418600912793, 1.7992801539873668),
    (94, 0.50301937914167016, 1.3392063511451127),
    (95, 0.72816505819601796, 1.2467170586713898),
    (96, 0.12332984475841616, 0.70059295085357276),
    (97, 0.13166317809174949, 0.83605768591197993),
    (98, 0.3911737158631568, 1.1982275635946507),
    (99, 0.46125078050543888, 1.3666198664731635),
    (100, 0.33994266602962253, 1.2937768365344746),
    (101, 0.33578993470297813, 1.4290936935217893),
    (102, 0.53412698412698412, 1.1103949100640773),
    (103, 0.62486772486772479, 1.1836205066151093),
    (104, 0.16744749181723967, 1.065361090700998),
    (105, 0.28956078157758824, 1.5141185720381372),
    (106, 0.43451496540645246, 1.5629970342065982),
    (107, 0.59706114329789883, 1.7641244773485871),
    (108, 0.51276555215174136, 1.9332078766672536),
    (109, 0.53716184355570551, 2.3477298370476087),
    (110, 0.70061858076563954, 1.2525263904043693),
    (111, 0.88680361033302213, 0.66655197325343341),
    (112, 0.22210746646836871, 0.98284083480418016),
    (113, 0.34526070212160437, 1.5308155869885147),
    (114, 0.41958960548368851, 1.2964581232760615),
    (115, 0.49908998687194184, 1.2669173542480401),
    (116, 0.3607294900201079, 1.526206408216177),
    (117, 0.28614900545678579, 1.8900199883964692),
    (118, 0.55760233918128654, 1.2086824913620702),
    (119, 0.71616541353383456, 1.0718974188203381),
    (120, 0.27020331299411349, 1.3475414598400184),
    (121, 0.40174075028121914, 2.165435618385386),
    (122, 0.46370725254251211, 1.6612262631234871),
    (123, 0.72514734345301823, 1.4983201090408977),
    (124, 0.44615832896557084, 2.1417371917631312),
    (125, 0.91143954383959769, 0.74577863233008812),
    (126, 0.75579328222517073, 1.3508269475938683),
    (127, 0.94967811686077941, 0.41750771073259779),
    (128, 0.050321883139220598, 0.41750771073259779),
    (129, 0.058655216472553923, 0.55297244579100502),
    (130, 0.088560456160402312, 0.74577863233008823),
    (131, 0.20035904404594673, 1.20125977591237),
    (132, 0.064297038418723695, 0.59513823214506001),
    (133, 0.072630371752057027, 0.73060296720346729),
    (134, 0.17877121158854906, 1.2324662098708954),
    (135, 0.439668647485985, 1.7558792239311225),
    (136, 0.28383458646616538, 1.0718974188203381),
    (137, 0.4423976608187134, 1.2086824913620702),
    (138, 0.32207315948734705, 1.4001683404178284),
    (139, 0.6392705099798921, 1.5262064082161768),
    (140, 0.50091001312805816, 1.2669173542480401),
    (141, 0.58041039451631149, 1.2964581232760617),
    (142, 0.65473929787839558, 1.5308155869885147),
    (143, 0.77789253353163135, 0.98284083480418005),
    (144, 0.1131963896669779, 0.66655197325343352),
    (145, 0.29938141923436046, 1.2525263904043693),
    (146, 0.15143496268815962, 0.9948228948509239),
    (147, 0.48723444784825853, 1.9332078766672538),
    (148, 0.127171544946481, 0.84418249466589579),
    (149, 0.31419691064831723, 1.4301544778348341),
    (150, 0.2150039502980679, 1.4766783238406624),
    (151, 0.4967562666092078, 2.3733000676345357),
    (152, 0.37513227513227509, 1.1836205066151095),
    (153, 0.46587301587301583, 1.1103949100640773),
    (154, 0.42077825556086423, 1.5123912088594444),
    (155, 0.66005733397037747, 1.2937768365344748),
    (156, 0.53874921949456112, 1.3666198664731635),
    (157, 0.60882628413684314, 1.1982275635946507),
    (158, 0.61505756148613289, 1.6957272341415024),
    (159, 0.87667015524158387, 0.70059295085357276),
    (160, 0.093760797166369897, 0.79212899530802594),
    (161, 0.10209413049970324, 0.92759373036643322),
    (162, 0.2978069641281379, 1.4171867922879469),
    (163, 0.44409141993944795, 1.5934747349355443),
    (164, 0.10773595244587303, 0.96975951672048821),
    (165, 0.11606928577920635, 1.1052242517788953),
    (166, 0.51091945550149875, 1.6573270711216315),
    (167, 0.56147967959113476, 1.7311359254868035),
    (168, 0.32727350049331472, 1.4465187033957663),
    (169, 0.48516823733541992, 1.5832989178476442),
    (170, 0.53299051123118968, 2.0715763902797497),
    (171, 0.73193825712334259, 1.9585889034616266),
    (172, 0.54061287896018584, 1.6415640551206301),
    (173, 0.61797748613028491, 1.6711653371257824),
    (174, 0.79340503745357793, 1.9949016155398991),
    (175, 0.93287350027730387, 0.95756205618903367),
    (176, 0.34220354808590103, 1.1341570317754797),
    (177, 0.49873500682324212, 1.2938969772147795),
    (178, 0.56696385288983464, 1.6210577722898867),
    (179, 0.66890959282263629, 1.2014207168278768),
    (180, 0.35212278235446581, 1.311732979038307),
    (181, 0.51430464605017034, 1.4715248963288992),
    (182, 0.5460537156038886, 1.8522401035764895),
    (183, 0.79242530345471529, 1.3390595590554815),
    (184, 0.53064473652708943, 1.6136587974682621),
    (185, 0.69852043381455142, 1.1517499186846383),
    (186, 0.66731078904991947, 2.1323739905747536),
    (187, 0.95106158405391139, 0.44724989362240936),
    (188, 0.57841075858065261, 1.8280691841810244),
    (189, 0.80817987172572492, 1.2395981504050608),
    (190, 0.98749833266639986, 0.2115707977570013),
    (191, 0.99583166599973327, 0.076106062698594129),
    (192, 0.10662252517105913, 0.73120503103683598),
    (193, 0.11495585850439247, 0.86666976609524315),
    (194, 0.14486109819224086, 1.0594759526343265),
    (195, 0.28371694861128161, 1.5196246434953506),
    (196, 0.36283483645174314, 1.3367809870386012),
    (197, 0.37547561358639564, 1.4722877888709536),
    (198, 0.54355666693127991, 1.9311893707502219),
    (199, 0.54578691575595606, 2.37948659466519),
    (200, 0.43621922453191803, 1.2430801351936438),
    (201, 0.49771733254705391, 1.3683269101897111),
    (202, 0.46833034657270756, 1.5713287084674799),
    (203, 0.63064396679284285, 1.7448418743717693),
    (204, 0.55360748418360473, 1.1054189446423845),
    (205, 0.66252075200789695, 1.1350049305480574),
    (206, 0.7341103040406447, 1.1978701418815909),
    (207, 0.92478367865364774, 0.62493958706952091),
    (208, 0.23520074696545284, 0.98928958641659903),
    (209, 0.38242914812984019, 1.5660982772925292),
    (210, 0.2687707859063358, 1.3176451468192811),
    (211, 0.39220932520165258, 2.1344736656338421),
    (212, 0.38034479492280004, 1.5320584134808064),
    (213, 0.32826901860488433, 1.9223988442784476),
    (214, 0.43913435660840505, 2.1071962910322868),
    (215, 0.91244343891402713, 0.7393894244228536),
    (216, 0.48884220354808589, 1.3136282147542058),
    (217, 0.55060690943043888, 1.2399269543444267),
    (218, 0.51637816219018262, 1.641682117558648),
    (219, 0.75727729218777806, 1.4231610027437314),
    (220, 0.6016552998010799, 1.1757723537335529),
    (221, 0.75251491901108269, 0.99967908155534912),
    (222, 0.77661513323278031, 1.2682435501664322),
    (223, 0.95656108597285072, 0.37462128457542815),
    (224, 0.35237131289762869, 1.1271544850268556),
    (225, 0.3637529910749725, 1.2626743767707964),
    (226, 0.59165913504990086, 1.5953446907525177),
    (227, 0.53296246797727487, 1.7853796104159876),
    (228, 0.50063162036509723, 1.2956895222178162),
    (229, 0.51752185648066651, 1.4311793531903803),
    (230, 0.72660818713450293, 1.1128179174966726),
    (231, 0.80994152046783618, 1.1865432946945491),
    (232, 0.61199151725467515, 1.5986632892151242),
    (233, 0.56316432105905789, 1.7621782992732569),
    (234, 0.73174239947695319, 2.1195609187119784),
    (235, 0.98427045875558461, 0.22293989534279546),
    (236, 0.76131402922020763, 1.06511629500375),
    (237, 0.84081441060846096, 1.0946570640317717),
    (238, 0.97390350877192977, 0.32339599960325532),
    (239, 0.99824561403508771, 0.045309373930333192),
    (240, 0.38551317963082671, 1.0146530038369368),
    (241, 0.56568896789485035, 1.1742671887063632),
    (242, 0.59868672106523779, 1.3282786502890218),
    (243, 0.81154092071611261, 0.8545410451662383),
    (244, 0.57955712942925219, 1.1831545912360633),
    (245, 0.71394927536231889, 1.3428022258973238),
    (246, 0.88137254901960782, 0.80268632487816549),
    (247, 0.95588235294117652, 0.3647681398474254),
    (248, 0.60073260073260082, 1.3383038720503047),
    (249, 0.87155067155067156, 0.81495849913829743),
    (250, 0.80303657694962038, 1.6518515313033091),
    (251, 0.9860248447204969, 0.17763052141246227),
    (252, 0.84996283909327386, 0.78375206517977214),
    (253, 0.96176142697881828, 0.32827092159749038),
    (254, 0.9916666666666667, 0.13546473505840717),
    (255, 1.0, 0.0),
];

// (pattern, area fraction, interface length)
#[rustfmt::skip]
const QUAD_REGRESSION: [(usize, f64, f64); 16] = [
    (0, 0.0, 0.0),
    (1, 0.037499999999999999, 0.39051248379533271),
    (2, 0.21304347826086956, 0.92763699633823649),
    (3, 0.42934782608695654, 1.0623853212881231),
    (4, 0.065217391304347824, 0.51403327104255647),
    (5, 0.10271739130434782, 0.90454575483788924),
    (6, 0.51666666666666661, 1.0651030205780305),
    (7, 0.75, 1.0034662148993581),
    (8, 0.25, 1.0034662148993578),
    (9, 0.48333333333333328, 1.0651030205780305),
    (10, 0.89728260869565213, 0.90454575483788924),
    (11, 0.93478260869565222, 0.51403327104255647),
    (12, 0.57065217391304346, 1.0623853212881231),
    (13, 0.78695652173913044, 0.92763699633823649),
    (14, 0.96250000000000002, 0.39051248379533277),
    (15, 1.0, 0.0),
];

#[test]
fn cube_regression_table() {
    for (pattern, volume, area) in CUBE_REGRESSION {
        let samples = cube_pattern(pattern, &MAGNITUDES);
        assert_eq!(cube_index(&samples), pattern);
        assert_relative_eq!(cube_volume_fraction(samples), volume, epsilon = 1.0e-12);
        assert_relative_eq!(cube_interface_area(samples), area, epsilon = 1.0e-12);
    }
}

#[test]
fn quad_regression_table() {
    for (pattern, fraction, length) in QUAD_REGRESSION {
        let samples = quad_pattern(pattern, &MAGNITUDES);
        assert_eq!(quad_index(&samples), pattern);
        assert_relative_eq!(quad_area_fraction(samples), fraction, epsilon = 1.0e-12);
        assert_relative_eq!(quad_interface_length(samples), length, epsilon = 1.0e-12);
    }
}

#[test]
fn combined_measures_match_the_table() {
    for (pattern, volume, area) in CUBE_REGRESSION {
        let m = cube_measures(cube_pattern(pattern, &MAGNITUDES));
        assert_relative_eq!(m.volume_fraction, volume, epsilon = 1.0e-12);
        assert_relative_eq!(m.interface_area, area, epsilon = 1.0e-12);
    }
    for (pattern, fraction, length) in QUAD_REGRESSION {
        let m = quad_measures(quad_pattern(pattern, &MAGNITUDES));
        assert_relative_eq!(m.area_fraction, fraction, epsilon = 1.0e-12);
        assert_relative_eq!(m.interface_length, length, epsilon = 1.0e-12);
    }
}

#[test]
fn checkerboards() {
    let quad = [-0.5, 0.5, -0.5, 0.5];
    assert_relative_eq!(quad_area_fraction(quad), 0.25, epsilon = 1.0e-12);
    assert_relative_eq!(quad_interface_length(quad), 2.0f64.sqrt(), epsilon = 1.0e-12);

    let cube = [-0.5, 0.5, -0.5, 0.5, -0.5, 0.5, -0.5, 0.5];
    assert_relative_eq!(cube_volume_fraction(cube), 0.25, epsilon = 1.0e-12);
    assert_relative_eq!(cube_interface_area(cube), 2.0f64.sqrt(), epsilon = 1.0e-12);
}

#[test]
fn quad_saddles() {
    let joined = 0.929_545_454_545_454_6;
    let separated = 0.070_454_545_454_545_46;
    let length = 0.750_843_193_797_457_5;

    // Both checkerboard patterns, each with a negative and a non-negative sample sum.
    let cases = [
        ([-0.8, 0.2, -0.6, 0.3], joined),
        ([-0.2, 0.8, -0.3, 0.6], separated),
        ([0.8, -0.2, 0.6, -0.3], separated),
        ([0.2, -0.8, 0.3, -0.6], joined),
    ];
    for (samples, fraction) in cases {
        assert_relative_eq!(quad_area_fraction(samples), fraction, epsilon = 1.0e-12);
        assert_relative_eq!(quad_interface_length(samples), length, epsilon = 1.0e-12);
    }
}

#[test]
fn zero_samples() {
    let m = cube_measures([0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    assert_eq!(m.volume_fraction, 0.0);
    assert_eq!(m.interface_area, 0.0);

    // Only the negative corner is inside; the zeros pin the crossings onto the far corners.
    let m = cube_measures([-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_relative_eq!(m.volume_fraction, 1.0 / 6.0, epsilon = 1.0e-12);
    assert_relative_eq!(m.interface_area, 3.0f64.sqrt() / 2.0, epsilon = 1.0e-12);

    let m = quad_measures([-1.0, 0.0, 0.0, 0.0]);
    assert_relative_eq!(m.area_fraction, 0.5, epsilon = 1.0e-12);
    assert_relative_eq!(m.interface_length, 2.0f64.sqrt(), epsilon = 1.0e-12);
}
