use crate::cell::CubeRotation;

/// The number of canonical cube cases, trivial ones included.
pub const CUBE_CASE_COUNT: usize = 23;

/// The sign pattern each canonical case expects once its samples have been rotated.
pub const CUBE_CANONICAL_INDICES: [usize; CUBE_CASE_COUNT] = [
    0, 1, 3, 33, 65, 14, 67, 82, 15, 141, 170, 77, 30, 90, 142, 173, 188, 241, 190, 222, 252, 254,
    255,
];

/// Which of the two valid triangulations of the tunnel configuration (canonical case 9) is used.
///
/// The choice is enumerated in the dispatch table rather than derived from the samples. Sign
/// complementary patterns always carry opposite triangulations so that the tunnel of one is the
/// solid of the other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TunnelTriangulation {
    /// Fan around the crossing on edge 1.
    #[default]
    Primary,
    /// Fan around the crossing on edge 6.
    Alternate,
}

/// The canonical case, rotation and triangulation for one cube sign pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CubeDispatch {
    /// The canonical case, in `[0, 23)`.
    pub case: u8,
    /// The rotation taking the raw samples to the canonical orientation of `case`.
    pub rotation: CubeRotation,
    /// Only read by the tunnel case. Other entries may carry `Alternate` as an artifact of the
    /// enumeration; their formulas have a single triangulation.
    pub tunnel: TunnelTriangulation,
}

const fn d(case: u8, rotation: u8) -> CubeDispatch {
    CubeDispatch {
        case,
        rotation: CubeRotation::from_table(rotation),
        tunnel: TunnelTriangulation::Primary,
    }
}

const fn alt(case: u8, rotation: u8) -> CubeDispatch {
    CubeDispatch {
        case,
        rotation: CubeRotation::from_table(rotation),
        tunnel: TunnelTriangulation::Alternate,
    }
}

#[rustfmt::skip]
const CUBE_DISPATCH: [CubeDispatch; 256] = [
    d(0, 0),      //   0: 0b0000_0000
    d(1, 0),      //   1: 0b0000_0001
    d(1, 6),      //   2: 0b0000_0010
    d(2, 0),      //   3: 0b0000_0011
    d(1, 8),      //   4: 0b0000_0100
    d(3, 12),     //   5: 0b0000_0101
    d(2, 12),     //   6: 0b0000_0110
    d(5, 7),      //   7: 0b0000_0111
    d(1, 3),      //   8: 0b0000_1000
    d(2, 7),      //   9: 0b0000_1001
    d(3, 3),      //  10: 0b0000_1010
    d(5, 8),      //  11: 0b0000_1011
    d(2, 8),      //  12: 0b0000_1100
    d(5, 9),      //  13: 0b0000_1101
    d(5, 0),      //  14: 0b0000_1110
    d(8, 0),      //  15: 0b0000_1111
    d(1, 1),      //  16: 0b0001_0000
    d(2, 10),     //  17: 0b0001_0001
    d(3, 4),      //  18: 0b0001_0010
    d(5, 13),     //  19: 0b0001_0011
    d(4, 8),      //  20: 0b0001_0100
    d(6, 4),      //  21: 0b0001_0101
    d(6, 12),     //  22: 0b0001_0110
    d(11, 8),     //  23: 0b0001_0111
    d(3, 7),      //  24: 0b0001_1000
    d(5, 17),     //  25: 0b0001_1001
    d(7, 12),     //  26: 0b0001_1010
    alt(9, 19),   //  27: 0b0001_1011
    d(6, 8),      //  28: 0b0001_1100
    alt(14, 9),   //  29: 0b0001_1101
    d(12, 0),     //  30: 0b0001_1110
    d(17, 22),    //  31: 0b0001_1111
    d(1, 5),      //  32: 0b0010_0000
    d(3, 0),      //  33: 0b0010_0001
    d(2, 13),     //  34: 0b0010_0010
    d(5, 1),      //  35: 0b0010_0011
    d(3, 13),     //  36: 0b0010_0100
    d(7, 4),      //  37: 0b0010_0101
    d(5, 21),     //  38: 0b0010_0110
    alt(9, 14),   //  39: 0b0010_0111
    d(4, 5),      //  40: 0b0010_1000
    d(6, 7),      //  41: 0b0010_1001
    d(6, 13),     //  42: 0b0010_1010
    d(14, 8),     //  43: 0b0010_1011
    d(6, 3),      //  44: 0b0010_1100
    alt(12, 9),   //  45: 0b0010_1101
    d(11, 14),    //  46: 0b0010_1110
    d(17, 5),     //  47: 0b0010_1111
    d(2, 1),      //  48: 0b0011_0000
    d(5, 18),     //  49: 0b0011_0001
    d(5, 10),     //  50: 0b0011_0010
    d(8, 13),     //  51: 0b0011_0011
    d(6, 1),      //  52: 0b0011_0100
    alt(12, 18),  //  53: 0b0011_0101
    d(14, 10),    //  54: 0b0011_0110
    d(17, 16),    //  55: 0b0011_0111
    d(6, 5),      //  56: 0b0011_1000
    d(11, 13),    //  57: 0b0011_1001
    alt(12, 10),  //  58: 0b0011_1010
    d(17, 3),     //  59: 0b0011_1011
    d(10, 21),    //  60: 0b0011_1100
    d(16, 2),     //  61: 0b0011_1101
    d(16, 20),    //  62: 0b0011_1110
    d(20, 20),    //  63: 0b0011_1111
    d(1, 20),     //  64: 0b0100_0000
    d(4, 0),      //  65: 0b0100_0001
    d(3, 23),     //  66: 0b0100_0010
    d(6, 0),      //  67: 0b0100_0011
    d(2, 21),     //  68: 0b0100_0100
    d(6, 21),     //  69: 0b0100_0101
    d(5, 14),     //  70: 0b0100_0110
    d(14, 14),    //  71: 0b0100_0111
    d(3, 21),     //  72: 0b0100_1000
    d(6, 11),     //  73: 0b0100_1001
    d(7, 13),     //  74: 0b0100_1010
    alt(12, 8),   //  75: 0b0100_1011
    d(5, 15),     //  76: 0b0100_1100
    d(11, 0),     //  77: 0b0100_1101
    alt(9, 20),   //  78: 0b0100_1110
    d(17, 23),    //  79: 0b0100_1111
    d(3, 1),      //  80: 0b0101_0000
    d(6, 10),     //  81: 0b0101_0001
    d(7, 0),      //  82: 0b0101_0010
    d(12, 13),    //  83: 0b0101_0011
    d(6, 16),     //  84: 0b0101_0100
    d(10, 7),     //  85: 0b0101_0101
    alt(12, 14),  //  86: 0b0101_0110
    d(16, 19),    //  87: 0b0101_0111
    d(7, 8),      //  88: 0b0101_1000
    d(12, 17),    //  89: 0b0101_1001
    d(13, 0),     //  90: 0b0101_1010
    d(15, 1),     //  91: 0b0101_1011
    d(12, 15),    //  92: 0b0101_1100
    d(16, 6),     //  93: 0b0101_1101
    d(15, 7),     //  94: 0b0101_1110
    d(19, 17),    //  95: 0b0101_1111
    d(2, 14),     //  96: 0b0110_0000
    d(6, 23),     //  97: 0b0110_0001
    d(5, 12),     //  98: 0b0110_0010
    d(11, 10),    //  99: 0b0110_0011
    d(5, 6),      // 100: 0b0110_0100
    alt(12, 6),   // 101: 0b0110_0101
    d(8, 12),     // 102: 0b0110_0110
    d(17, 11),    // 103: 0b0110_0111
    d(6, 14),     // 104: 0b0110_1000
    d(10, 1),     // 105: 0b0110_1001
    d(12, 12),    // 106: 0b0110_1010
    d(16, 22),    // 107: 0b0110_1011
    alt(14, 6),   // 108: 0b0110_1100
    d(16, 17),    // 109: 0b0110_1101
    d(17, 19),    // 110: 0b0110_1110
    d(20, 22),    // 111: 0b0110_1111
    d(5, 2),      // 112: 0b0111_0000
    alt(14, 18),  // 113: 0b0111_0001
    alt(9, 22),   // 114: 0b0111_0010
    d(17, 20),    // 115: 0b0111_0011
    d(11, 12),    // 116: 0b0111_0100
    d(16, 15),    // 117: 0b0111_0101
    d(17, 4),     // 118: 0b0111_0110
    d(20, 19),    // 119: 0b0111_0111
    d(12, 2),     // 120: 0b0111_1000
    d(16, 9),     // 121: 0b0111_1001
    d(15, 21),    // 122: 0b0111_1010
    d(19, 2),     // 123: 0b0111_1011
    d(16, 18),    // 124: 0b0111_1100
    d(18, 6),     // 125: 0b0111_1101
    d(19, 15),    // 126: 0b0111_1110
    d(21, 2),     // 127: 0b0111_1111
    d(1, 2),      // 128: 0b1000_0000
    d(3, 15),     // 129: 0b1000_0001
    d(4, 6),      // 130: 0b1000_0010
    d(6, 18),     // 131: 0b1000_0011
    d(3, 2),      // 132: 0b1000_0100
    d(7, 21),     // 133: 0b1000_0101
    d(6, 9),      // 134: 0b1000_0110
    alt(12, 7),   // 135: 0b1000_0111
    d(2, 19),     // 136: 0b1000_1000
    d(5, 4),      // 137: 0b1000_1001
    d(6, 15),     // 138: 0b1000_1010
    alt(11, 9),   // 139: 0b1000_1011
    d(5, 20),     // 140: 0b1000_1100
    d(9, 0),      // 141: 0b1000_1101
    d(14, 0),     // 142: 0b1000_1110
    d(17, 2),     // 143: 0b1000_1111
    d(2, 22),     // 144: 0b1001_0000
    d(5, 19),     // 145: 0b1001_0001
    d(6, 17),     // 146: 0b1001_0010
    d(14, 13),    // 147: 0b1001_0011
    d(6, 22),     // 148: 0b1001_0100
    alt(12, 19),  // 149: 0b1001_0101
    d(10, 13),    // 150: 0b1001_0110
    d(16, 14),    // 151: 0b1001_0111
    d(5, 11),     // 152: 0b1001_1000
    d(8, 4),      // 153: 0b1001_1001
    d(12, 11),    // 154: 0b1001_1010
    d(17, 6),     // 155: 0b1001_1011
    alt(11, 4),   // 156: 0b1001_1100
    d(17, 12),    // 157: 0b1001_1101
    d(16, 23),    // 158: 0b1001_1110
    d(20, 14),    // 159: 0b1001_1111
    d(3, 17),     // 160: 0b1010_0000
    d(7, 7),      // 161: 0b1010_0001
    d(6, 6),      // 162: 0b1010_0010
    alt(12, 1),   // 163: 0b1010_0011
    d(7, 1),      // 164: 0b1010_0100
    d(13, 19),    // 165: 0b1010_0101
    alt(12, 21),  // 166: 0b1010_0110
    d(15, 8),     // 167: 0b1010_0111
    d(6, 19),     // 168: 0b1010_1000
    d(12, 4),     // 169: 0b1010_1001
    d(10, 0),     // 170: 0b1010_1010
    d(16, 16),    // 171: 0b1010_1011
    alt(12, 20),  // 172: 0b1010_1100
    d(15, 0),     // 173: 0b1010_1101
    d(16, 10),    // 174: 0b1010_1110
    d(19, 1),     // 175: 0b1010_1111
    d(5, 23),     // 176: 0b1011_0000
    d(9, 13),     // 177: 0b1011_0001
    alt(11, 18),  // 178: 0b1011_0010
    d(17, 15),    // 179: 0b1011_0011
    d(12, 23),    // 180: 0b1011_0100
    d(15, 13),    // 181: 0b1011_0101
    d(16, 11),    // 182: 0b1011_0110
    d(19, 21),    // 183: 0b1011_0111
    alt(14, 23),  // 184: 0b1011_1000
    d(17, 14),    // 185: 0b1011_1001
    d(16, 21),    // 186: 0b1011_1010
    d(20, 21),    // 187: 0b1011_1011
    d(16, 0),     // 188: 0b1011_1100
    d(19, 23),    // 189: 0b1011_1101
    d(18, 0),     // 190: 0b1011_1110
    d(21, 20),    // 191: 0b1011_1111
    d(2, 20),     // 192: 0b1100_0000
    d(6, 20),     // 193: 0b1100_0001
    d(6, 2),      // 194: 0b1100_0010
    d(10, 12),    // 195: 0b1100_0011
    d(5, 3),      // 196: 0b1100_0100
    d(12, 3),     // 197: 0b1100_0101
    alt(11, 6),   // 198: 0b1100_0110
    d(16, 5),     // 199: 0b1100_0111
    d(5, 16),     // 200: 0b1100_1000
    alt(14, 4),   // 201: 0b1100_1001
    d(12, 16),    // 202: 0b1100_1010
    d(16, 1),     // 203: 0b1100_1011
    d(8, 3),      // 204: 0b1100_1100
    d(17, 10),    // 205: 0b1100_1101
    d(17, 18),    // 206: 0b1100_1110
    d(20, 1),     // 207: 0b1100_1111
    d(5, 5),      // 208: 0b1101_0000
    alt(11, 23),  // 209: 0b1101_0001
    d(12, 5),     // 210: 0b1101_0010
    d(16, 3),     // 211: 0b1101_0011
    alt(14, 3),   // 212: 0b1101_0100
    d(16, 13),    // 213: 0b1101_0101
    d(16, 7),     // 214: 0b1101_0110
    d(18, 5),     // 215: 0b1101_0111
    d(9, 4),      // 216: 0b1101_1000
    d(17, 21),    // 217: 0b1101_1001
    d(15, 4),     // 218: 0b1101_1010
    d(19, 13),    // 219: 0b1101_1011
    d(17, 1),     // 220: 0b1101_1100
    d(20, 13),    // 221: 0b1101_1101
    d(19, 0),     // 222: 0b1101_1110
    d(21, 5),     // 223: 0b1101_1111
    d(5, 22),     // 224: 0b1110_0000
    alt(12, 22),  // 225: 0b1110_0001
    d(14, 12),    // 226: 0b1110_0010
    d(16, 8),     // 227: 0b1110_0011
    d(9, 12),     // 228: 0b1110_0100
    d(15, 12),    // 229: 0b1110_0101
    d(17, 17),    // 230: 0b1110_0110
    d(19, 7),     // 231: 0b1110_0111
    alt(11, 3),   // 232: 0b1110_1000
    d(16, 12),    // 233: 0b1110_1001
    d(16, 4),     // 234: 0b1110_1010
    d(18, 8),     // 235: 0b1110_1011
    d(17, 13),    // 236: 0b1110_1100
    d(19, 4),     // 237: 0b1110_1101
    d(20, 10),    // 238: 0b1110_1110
    d(21, 1),     // 239: 0b1110_1111
    d(8, 23),     // 240: 0b1111_0000
    d(17, 0),     // 241: 0b1111_0001
    d(17, 9),     // 242: 0b1111_0010
    d(20, 8),     // 243: 0b1111_0011
    d(17, 8),     // 244: 0b1111_0100
    d(19, 3),     // 245: 0b1111_0101
    d(20, 7),     // 246: 0b1111_0110
    d(21, 3),     // 247: 0b1111_0111
    d(17, 7),     // 248: 0b1111_1000
    d(20, 12),    // 249: 0b1111_1001
    d(19, 12),    // 250: 0b1111_1010
    d(21, 8),     // 251: 0b1111_1011
    d(20, 0),     // 252: 0b1111_1100
    d(21, 6),     // 253: 0b1111_1101
    d(21, 0),     // 254: 0b1111_1110
    d(22, 0),     // 255: 0b1111_1111
];

/// The dispatch entry of the cube sign pattern `index`.
///
/// # Panics
/// If `index >= 256`.
#[inline]
pub fn cube_dispatch(index: usize) -> CubeDispatch {
    CUBE_DISPATCH[index]
}
