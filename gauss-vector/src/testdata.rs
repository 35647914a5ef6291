#[rustfmt::skip]
pub const SET: [f64; 50] = [
    10., 82., 67., 17., 36., 3., 1., 61., 33., 20.,
    18., 35., 15., 39., 52., 85., 17., 92., 88., 70.,
    66., 85., 93., 81., 70., 41., 40., 22., 38., 52.,
    86., 60., 64., 38., 87., 15., 92., 61., 93., 17.,
    38., 68., 11., 98., 62., 75., 94., 63., 49., 97.,
];

/// `SET` with its last two values replaced by another 17
#[rustfmt::skip]
pub const MAJORITY: [f64; 49] = [
    10., 82., 67., 17., 36., 3., 1., 61., 33., 20.,
    18., 35., 15., 39., 52., 85., 17., 92., 88., 70.,
    66., 85., 93., 81., 70., 41., 40., 22., 38., 52.,
    86., 60., 64., 38., 87., 15., 92., 61., 93., 17.,
    38., 68., 11., 98., 62., 75., 94., 63., 17.,
];

#[rustfmt::skip]
pub const PRICES: [f64; 30] = [
    22.2734, 22.194, 22.0847, 22.1741, 22.184, 22.1344,
    22.2337, 22.4323, 22.2436, 22.2933, 22.1542, 22.3926,
    22.3816, 22.6109, 23.3558, 24.0519, 23.753, 23.8324,
    23.9516, 23.6338, 23.8225, 23.8722, 23.6537, 23.187,
    23.0976, 23.326, 22.6805, 23.0976, 22.4025, 22.1725,
];
