//! Surfel normals for every 2x2x2 neighbour code.
//!
//! Entry `c` lists the surface normals of the marching-cubes triangles
//! generated for neighbour code `c` on a unit cube. The length of each
//! normal is the area of its triangle, so summing the norms gives the
//! surfel area at unit spacing. Codes 0 and 255 carry a single zero
//! normal: no surface passes through a fully outside or fully inside
//! corner.
//!
//! Bit `b` of a code is the occupancy of the stencil voxel with weight
//! `1 << b`; see [`crate::neighbour_codes`] for the stencil layout.

/// Number of distinct neighbour codes.
pub const NEIGHBOUR_CODE_COUNT: usize = 256;

/// Unit-spacing surfel normals, indexed by neighbour code.
#[rustfmt::skip]
static NEIGHBOUR_CODE_TO_NORMALS: [&[[f64; 3]]; NEIGHBOUR_CODE_COUNT] = [
    &[[0.0, 0.0, 0.0]], // 0
    &[[0.125, 0.125, 0.125]], // 1
    &[[-0.125, -0.125, 0.125]], // 2
    &[[-0.25, -0.25, 0.0], [0.25, 0.25, -0.0]], // 3
    &[[0.125, -0.125, 0.125]], // 4
    &[[-0.25, -0.0, -0.25], [0.25, 0.0, 0.25]], // 5
    &[[0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 6
    &[[0.5, 0.0, -0.0], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125]], // 7
    &[[-0.125, 0.125, 0.125]], // 8
    &[[0.125, 0.125, 0.125], [-0.125, 0.125, 0.125]], // 9
    &[[-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25]], // 10
    &[[0.5, 0.0, 0.0], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 11
    &[[0.25, -0.25, 0.0], [0.25, -0.25, 0.0]], // 12
    &[[0.5, 0.0, 0.0], [0.25, -0.25, 0.25], [-0.125, 0.125, -0.125]], // 13
    &[[-0.5, 0.0, 0.0], [-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 14
    &[[0.5, 0.0, 0.0], [0.5, 0.0, 0.0]], // 15
    &[[0.125, -0.125, -0.125]], // 16
    &[[0.0, -0.25, -0.25], [0.0, 0.25, 0.25]], // 17
    &[[-0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 18
    &[[0.0, -0.5, 0.0], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125]], // 19
    &[[0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 20
    &[[0.0, 0.0, -0.5], [0.25, 0.25, 0.25], [-0.125, -0.125, -0.125]], // 21
    &[[-0.125, -0.125, 0.125], [0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 22
    &[[-0.125, -0.125, -0.125], [-0.25, -0.25, -0.25], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125]], // 23
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, -0.125]], // 24
    &[[0.0, -0.25, -0.25], [0.0, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 25
    &[[-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25], [0.125, -0.125, -0.125]], // 26
    &[[0.125, 0.125, 0.125], [0.375, 0.375, 0.375], [0.0, -0.25, 0.25], [-0.25, 0.0, 0.25]], // 27
    &[[0.125, -0.125, -0.125], [0.25, -0.25, 0.0], [0.25, -0.25, 0.0]], // 28
    &[[0.375, 0.375, 0.375], [0.0, 0.25, -0.25], [-0.125, -0.125, -0.125], [-0.25, 0.25, 0.0]], // 29
    &[[-0.5, 0.0, 0.0], [-0.125, -0.125, -0.125], [-0.25, -0.25, -0.25], [0.125, 0.125, 0.125]], // 30
    &[[-0.5, 0.0, 0.0], [-0.125, -0.125, -0.125], [-0.25, -0.25, -0.25]], // 31
    &[[0.125, -0.125, 0.125]], // 32
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125]], // 33
    &[[0.0, -0.25, 0.25], [0.0, 0.25, -0.25]], // 34
    &[[0.0, -0.5, 0.0], [0.125, 0.125, -0.125], [0.25, 0.25, -0.25]], // 35
    &[[0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 36
    &[[0.125, -0.125, 0.125], [-0.25, -0.0, -0.25], [0.25, 0.0, 0.25]], // 37
    &[[0.0, -0.25, 0.25], [0.0, 0.25, -0.25], [0.125, -0.125, 0.125]], // 38
    &[[-0.375, -0.375, 0.375], [-0.0, 0.25, 0.25], [0.125, 0.125, -0.125], [-0.25, -0.0, -0.25]], // 39
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, 0.125]], // 40
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [-0.125, 0.125, 0.125]], // 41
    &[[-0.0, 0.0, 0.5], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 42
    &[[0.25, 0.25, -0.25], [0.25, 0.25, -0.25], [0.125, 0.125, -0.125], [-0.125, -0.125, 0.125]], // 43
    &[[0.125, -0.125, 0.125], [0.25, -0.25, 0.0], [0.25, -0.25, 0.0]], // 44
    &[[0.5, 0.0, 0.0], [0.25, -0.25, 0.25], [-0.125, 0.125, -0.125], [0.125, -0.125, 0.125]], // 45
    &[[0.0, 0.25, -0.25], [0.375, -0.375, -0.375], [-0.125, 0.125, 0.125], [0.25, 0.25, 0.0]], // 46
    &[[-0.5, 0.0, 0.0], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 47
    &[[0.25, -0.25, 0.0], [-0.25, 0.25, 0.0]], // 48
    &[[0.0, 0.5, 0.0], [-0.25, 0.25, 0.25], [0.125, -0.125, -0.125]], // 49
    &[[0.0, 0.5, 0.0], [0.125, -0.125, 0.125], [-0.25, 0.25, -0.25]], // 50
    &[[0.0, 0.5, 0.0], [0.0, -0.5, 0.0]], // 51
    &[[0.25, -0.25, 0.0], [-0.25, 0.25, 0.0], [0.125, -0.125, 0.125]], // 52
    &[[-0.375, -0.375, -0.375], [-0.25, 0.0, 0.25], [-0.125, -0.125, -0.125], [-0.25, 0.25, 0.0]], // 53
    &[[0.125, 0.125, 0.125], [0.0, -0.5, 0.0], [-0.25, -0.25, -0.25], [-0.125, -0.125, -0.125]], // 54
    &[[0.0, -0.5, 0.0], [-0.25, -0.25, -0.25], [-0.125, -0.125, -0.125]], // 55
    &[[-0.125, 0.125, 0.125], [0.25, -0.25, 0.0], [-0.25, 0.25, 0.0]], // 56
    &[[0.0, 0.5, 0.0], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 57
    &[[-0.375, 0.375, -0.375], [-0.25, -0.25, 0.0], [-0.125, 0.125, -0.125], [-0.25, 0.0, 0.25]], // 58
    &[[0.0, 0.5, 0.0], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125]], // 59
    &[[0.25, -0.25, 0.0], [-0.25, 0.25, 0.0], [0.25, -0.25, 0.0], [0.25, -0.25, 0.0]], // 60
    &[[-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0], [-0.125, -0.125, 0.125]], // 61
    &[[0.125, 0.125, 0.125], [-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0]], // 62
    &[[-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0]], // 63
    &[[-0.125, -0.125, 0.125]], // 64
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125]], // 65
    &[[-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 66
    &[[-0.125, -0.125, 0.125], [-0.25, -0.25, 0.0], [0.25, 0.25, -0.0]], // 67
    &[[0.0, -0.25, 0.25], [0.0, -0.25, 0.25]], // 68
    &[[0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125]], // 69
    &[[0.0, -0.25, 0.25], [0.0, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 70
    &[[0.375, -0.375, 0.375], [0.0, -0.25, -0.25], [-0.125, 0.125, -0.125], [0.25, 0.25, 0.0]], // 71
    &[[-0.125, -0.125, 0.125], [-0.125, 0.125, 0.125]], // 72
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125], [-0.125, 0.125, 0.125]], // 73
    &[[-0.125, -0.125, 0.125], [-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25]], // 74
    &[[0.5, 0.0, 0.0], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 75
    &[[-0.0, 0.5, 0.0], [-0.25, 0.25, -0.25], [0.125, -0.125, 0.125]], // 76
    &[[-0.25, 0.25, -0.25], [-0.25, 0.25, -0.25], [-0.125, 0.125, -0.125], [-0.125, 0.125, -0.125]], // 77
    &[[-0.25, 0.0, -0.25], [0.375, -0.375, -0.375], [0.0, 0.25, -0.25], [-0.125, 0.125, 0.125]], // 78
    &[[0.5, 0.0, 0.0], [-0.25, 0.25, -0.25], [0.125, -0.125, 0.125]], // 79
    &[[-0.25, 0.0, 0.25], [0.25, 0.0, -0.25]], // 80
    &[[-0.0, 0.0, 0.5], [-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 81
    &[[-0.125, -0.125, 0.125], [-0.25, 0.0, 0.25], [0.25, 0.0, -0.25]], // 82
    &[[-0.25, -0.0, -0.25], [-0.375, 0.375, 0.375], [-0.25, -0.25, 0.0], [-0.125, 0.125, 0.125]], // 83
    &[[0.0, 0.0, -0.5], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125]], // 84
    &[[-0.0, 0.0, 0.5], [0.0, 0.0, 0.5]], // 85
    &[[0.125, 0.125, 0.125], [0.125, 0.125, 0.125], [0.25, 0.25, 0.25], [0.0, 0.0, 0.5]], // 86
    &[[0.125, 0.125, 0.125], [0.25, 0.25, 0.25], [0.0, 0.0, 0.5]], // 87
    &[[-0.25, 0.0, 0.25], [0.25, 0.0, -0.25], [-0.125, 0.125, 0.125]], // 88
    &[[-0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 89
    &[[-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25], [0.25, 0.0, -0.25]], // 90
    &[[0.125, -0.125, 0.125], [0.25, 0.0, 0.25], [0.25, 0.0, 0.25]], // 91
    &[[0.25, 0.0, 0.25], [-0.375, -0.375, 0.375], [-0.25, 0.25, 0.0], [-0.125, -0.125, 0.125]], // 92
    &[[-0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125]], // 93
    &[[0.125, 0.125, 0.125], [0.25, 0.0, 0.25], [0.25, 0.0, 0.25]], // 94
    &[[0.25, 0.0, 0.25], [0.25, 0.0, 0.25]], // 95
    &[[-0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 96
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 97
    &[[-0.125, -0.125, 0.125], [0.0, -0.25, 0.25], [0.0, 0.25, -0.25]], // 98
    &[[0.0, -0.5, 0.0], [0.125, 0.125, -0.125], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125]], // 99
    &[[0.0, -0.25, 0.25], [0.0, -0.25, 0.25], [0.125, -0.125, 0.125]], // 100
    &[[0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 101
    &[[0.0, -0.25, 0.25], [0.0, -0.25, 0.25], [0.0, -0.25, 0.25], [0.0, 0.25, -0.25]], // 102
    &[[0.0, 0.25, 0.25], [0.0, 0.25, 0.25], [0.125, -0.125, -0.125]], // 103
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 104
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, 0.125, 0.125]], // 105
    &[[-0.0, 0.0, 0.5], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 106
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 107
    &[[-0.0, 0.5, 0.0], [-0.25, 0.25, -0.25], [0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 108
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 109
    &[[0.0, -0.25, -0.25], [0.0, 0.25, 0.25], [0.125, 0.125, 0.125]], // 110
    &[[0.125, 0.125, 0.125], [0.125, -0.125, -0.125]], // 111
    &[[0.5, 0.0, -0.0], [0.25, -0.25, -0.25], [0.125, -0.125, -0.125]], // 112
    &[[-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125], [-0.25, 0.25, 0.25], [0.125, -0.125, -0.125]], // 113
    &[[0.375, -0.375, 0.375], [0.0, 0.25, 0.25], [-0.125, 0.125, -0.125], [-0.25, 0.0, 0.25]], // 114
    &[[0.0, -0.5, 0.0], [-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 115
    &[[-0.375, -0.375, 0.375], [0.25, -0.25, 0.0], [0.0, 0.25, 0.25], [-0.125, -0.125, 0.125]], // 116
    &[[-0.125, 0.125, 0.125], [-0.25, 0.25, 0.25], [0.0, 0.0, 0.5]], // 117
    &[[0.125, 0.125, 0.125], [0.0, 0.25, 0.25], [0.0, 0.25, 0.25]], // 118
    &[[0.0, 0.25, 0.25], [0.0, 0.25, 0.25]], // 119
    &[[0.5, 0.0, -0.0], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125], [0.125, 0.125, 0.125]], // 120
    &[[0.125, -0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, 0.125, 0.125]], // 121
    &[[-0.25, -0.0, -0.25], [0.25, 0.0, 0.25], [0.125, 0.125, 0.125]], // 122
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125]], // 123
    &[[-0.25, -0.25, 0.0], [0.25, 0.25, -0.0], [0.125, 0.125, 0.125]], // 124
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125]], // 125
    &[[0.125, 0.125, 0.125], [0.125, 0.125, 0.125]], // 126
    &[[0.125, 0.125, 0.125]], // 127
    &[[0.125, 0.125, 0.125]], // 128
    &[[0.125, 0.125, 0.125], [0.125, 0.125, 0.125]], // 129
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125]], // 130
    &[[-0.25, -0.25, 0.0], [0.25, 0.25, -0.0], [0.125, 0.125, 0.125]], // 131
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125]], // 132
    &[[-0.25, -0.0, -0.25], [0.25, 0.0, 0.25], [0.125, 0.125, 0.125]], // 133
    &[[0.125, -0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, 0.125, 0.125]], // 134
    &[[0.5, 0.0, -0.0], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125], [0.125, 0.125, 0.125]], // 135
    &[[0.0, 0.25, 0.25], [0.0, 0.25, 0.25]], // 136
    &[[0.125, 0.125, 0.125], [0.0, 0.25, 0.25], [0.0, 0.25, 0.25]], // 137
    &[[-0.125, 0.125, 0.125], [-0.25, 0.25, 0.25], [0.0, 0.0, 0.5]], // 138
    &[[-0.375, -0.375, 0.375], [0.25, -0.25, 0.0], [0.0, 0.25, 0.25], [-0.125, -0.125, 0.125]], // 139
    &[[0.0, -0.5, 0.0], [-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 140
    &[[0.375, -0.375, 0.375], [0.0, 0.25, 0.25], [-0.125, 0.125, -0.125], [-0.25, 0.0, 0.25]], // 141
    &[[-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125], [-0.25, 0.25, 0.25], [0.125, -0.125, -0.125]], // 142
    &[[0.5, 0.0, -0.0], [0.25, -0.25, -0.25], [0.125, -0.125, -0.125]], // 143
    &[[0.125, 0.125, 0.125], [0.125, -0.125, -0.125]], // 144
    &[[0.0, -0.25, -0.25], [0.0, 0.25, 0.25], [0.125, 0.125, 0.125]], // 145
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 146
    &[[-0.0, 0.5, 0.0], [-0.25, 0.25, -0.25], [0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 147
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 148
    &[[-0.0, 0.0, 0.5], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 149
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, 0.125, 0.125]], // 150
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 151
    &[[0.0, 0.25, 0.25], [0.0, 0.25, 0.25], [0.125, -0.125, -0.125]], // 152
    &[[0.0, -0.25, -0.25], [0.0, 0.25, 0.25], [0.0, 0.25, 0.25], [0.0, 0.25, 0.25]], // 153
    &[[0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 154
    &[[0.0, -0.25, 0.25], [0.0, -0.25, 0.25], [0.125, -0.125, 0.125]], // 155
    &[[0.0, -0.5, 0.0], [0.125, 0.125, -0.125], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125]], // 156
    &[[-0.125, -0.125, 0.125], [0.0, -0.25, 0.25], [0.0, 0.25, -0.25]], // 157
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 158
    &[[-0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 159
    &[[0.25, 0.0, 0.25], [0.25, 0.0, 0.25]], // 160
    &[[0.125, 0.125, 0.125], [0.25, 0.0, 0.25], [0.25, 0.0, 0.25]], // 161
    &[[-0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125]], // 162
    &[[0.25, 0.0, 0.25], [-0.375, -0.375, 0.375], [-0.25, 0.25, 0.0], [-0.125, -0.125, 0.125]], // 163
    &[[0.125, -0.125, 0.125], [0.25, 0.0, 0.25], [0.25, 0.0, 0.25]], // 164
    &[[-0.25, -0.0, -0.25], [0.25, 0.0, 0.25], [0.25, 0.0, 0.25], [0.25, 0.0, 0.25]], // 165
    &[[-0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 166
    &[[-0.25, 0.0, 0.25], [0.25, 0.0, -0.25], [-0.125, 0.125, 0.125]], // 167
    &[[0.125, 0.125, 0.125], [0.25, 0.25, 0.25], [0.0, 0.0, 0.5]], // 168
    &[[0.125, 0.125, 0.125], [0.125, 0.125, 0.125], [0.25, 0.25, 0.25], [0.0, 0.0, 0.5]], // 169
    &[[-0.0, 0.0, 0.5], [0.0, 0.0, 0.5]], // 170
    &[[0.0, 0.0, -0.5], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125]], // 171
    &[[-0.25, -0.0, -0.25], [-0.375, 0.375, 0.375], [-0.25, -0.25, 0.0], [-0.125, 0.125, 0.125]], // 172
    &[[-0.125, -0.125, 0.125], [-0.25, 0.0, 0.25], [0.25, 0.0, -0.25]], // 173
    &[[-0.0, 0.0, 0.5], [-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 174
    &[[-0.25, 0.0, 0.25], [0.25, 0.0, -0.25]], // 175
    &[[0.5, 0.0, 0.0], [-0.25, 0.25, -0.25], [0.125, -0.125, 0.125]], // 176
    &[[-0.25, 0.0, -0.25], [0.375, -0.375, -0.375], [0.0, 0.25, -0.25], [-0.125, 0.125, 0.125]], // 177
    &[[-0.25, 0.25, -0.25], [-0.25, 0.25, -0.25], [-0.125, 0.125, -0.125], [-0.125, 0.125, -0.125]], // 178
    &[[-0.0, 0.5, 0.0], [-0.25, 0.25, -0.25], [0.125, -0.125, 0.125]], // 179
    &[[0.5, 0.0, 0.0], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 180
    &[[-0.125, -0.125, 0.125], [-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25]], // 181
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125], [-0.125, 0.125, 0.125]], // 182
    &[[-0.125, -0.125, 0.125], [-0.125, 0.125, 0.125]], // 183
    &[[0.375, -0.375, 0.375], [0.0, -0.25, -0.25], [-0.125, 0.125, -0.125], [0.25, 0.25, 0.0]], // 184
    &[[0.0, -0.25, 0.25], [0.0, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 185
    &[[0.0, 0.0, 0.5], [0.25, -0.25, 0.25], [0.125, -0.125, 0.125]], // 186
    &[[0.0, -0.25, 0.25], [0.0, -0.25, 0.25]], // 187
    &[[-0.125, -0.125, 0.125], [-0.25, -0.25, 0.0], [0.25, 0.25, -0.0]], // 188
    &[[-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 189
    &[[0.125, 0.125, 0.125], [-0.125, -0.125, 0.125]], // 190
    &[[-0.125, -0.125, 0.125]], // 191
    &[[-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0]], // 192
    &[[0.125, 0.125, 0.125], [-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0]], // 193
    &[[-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0], [-0.125, -0.125, 0.125]], // 194
    &[[-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0], [-0.25, -0.25, 0.0], [0.25, 0.25, -0.0]], // 195
    &[[0.0, 0.5, 0.0], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125]], // 196
    &[[-0.375, 0.375, -0.375], [-0.25, -0.25, 0.0], [-0.125, 0.125, -0.125], [-0.25, 0.0, 0.25]], // 197
    &[[0.0, 0.5, 0.0], [0.25, 0.25, -0.25], [-0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 198
    &[[-0.125, 0.125, 0.125], [0.25, -0.25, 0.0], [-0.25, 0.25, 0.0]], // 199
    &[[0.0, -0.5, 0.0], [-0.25, -0.25, -0.25], [-0.125, -0.125, -0.125]], // 200
    &[[0.125, 0.125, 0.125], [0.0, -0.5, 0.0], [-0.25, -0.25, -0.25], [-0.125, -0.125, -0.125]], // 201
    &[[-0.375, -0.375, -0.375], [-0.25, 0.0, 0.25], [-0.125, -0.125, -0.125], [-0.25, 0.25, 0.0]], // 202
    &[[0.25, -0.25, 0.0], [-0.25, 0.25, 0.0], [0.125, -0.125, 0.125]], // 203
    &[[0.0, 0.5, 0.0], [0.0, -0.5, 0.0]], // 204
    &[[0.0, 0.5, 0.0], [0.125, -0.125, 0.125], [-0.25, 0.25, -0.25]], // 205
    &[[0.0, 0.5, 0.0], [-0.25, 0.25, 0.25], [0.125, -0.125, -0.125]], // 206
    &[[0.25, -0.25, 0.0], [-0.25, 0.25, 0.0]], // 207
    &[[-0.5, 0.0, 0.0], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 208
    &[[0.0, 0.25, -0.25], [0.375, -0.375, -0.375], [-0.125, 0.125, 0.125], [0.25, 0.25, 0.0]], // 209
    &[[0.5, 0.0, 0.0], [0.25, -0.25, 0.25], [-0.125, 0.125, -0.125], [0.125, -0.125, 0.125]], // 210
    &[[0.125, -0.125, 0.125], [0.25, -0.25, 0.0], [0.25, -0.25, 0.0]], // 211
    &[[0.25, 0.25, -0.25], [0.25, 0.25, -0.25], [0.125, 0.125, -0.125], [-0.125, -0.125, 0.125]], // 212
    &[[-0.0, 0.0, 0.5], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 213
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125], [-0.125, 0.125, 0.125]], // 214
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, 0.125]], // 215
    &[[-0.375, -0.375, 0.375], [-0.0, 0.25, 0.25], [0.125, 0.125, -0.125], [-0.25, -0.0, -0.25]], // 216
    &[[0.0, -0.25, 0.25], [0.0, 0.25, -0.25], [0.125, -0.125, 0.125]], // 217
    &[[0.125, -0.125, 0.125], [-0.25, -0.0, -0.25], [0.25, 0.0, 0.25]], // 218
    &[[0.125, -0.125, 0.125], [0.125, -0.125, 0.125]], // 219
    &[[0.0, -0.5, 0.0], [0.125, 0.125, -0.125], [0.25, 0.25, -0.25]], // 220
    &[[0.0, -0.25, 0.25], [0.0, 0.25, -0.25]], // 221
    &[[0.125, 0.125, 0.125], [0.125, -0.125, 0.125]], // 222
    &[[0.125, -0.125, 0.125]], // 223
    &[[-0.5, 0.0, 0.0], [-0.125, -0.125, -0.125], [-0.25, -0.25, -0.25]], // 224
    &[[-0.5, 0.0, 0.0], [-0.125, -0.125, -0.125], [-0.25, -0.25, -0.25], [0.125, 0.125, 0.125]], // 225
    &[[0.375, 0.375, 0.375], [0.0, 0.25, -0.25], [-0.125, -0.125, -0.125], [-0.25, 0.25, 0.0]], // 226
    &[[0.125, -0.125, -0.125], [0.25, -0.25, 0.0], [0.25, -0.25, 0.0]], // 227
    &[[0.125, 0.125, 0.125], [0.375, 0.375, 0.375], [0.0, -0.25, 0.25], [-0.25, 0.0, 0.25]], // 228
    &[[-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25], [0.125, -0.125, -0.125]], // 229
    &[[0.0, -0.25, -0.25], [0.0, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 230
    &[[-0.125, 0.125, 0.125], [0.125, -0.125, -0.125]], // 231
    &[[-0.125, -0.125, -0.125], [-0.25, -0.25, -0.25], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125]], // 232
    &[[-0.125, -0.125, 0.125], [0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 233
    &[[0.0, 0.0, -0.5], [0.25, 0.25, 0.25], [-0.125, -0.125, -0.125]], // 234
    &[[0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 235
    &[[0.0, -0.5, 0.0], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125]], // 236
    &[[-0.125, -0.125, 0.125], [0.125, -0.125, -0.125]], // 237
    &[[0.0, -0.25, -0.25], [0.0, 0.25, 0.25]], // 238
    &[[0.125, -0.125, -0.125]], // 239
    &[[0.5, 0.0, 0.0], [0.5, 0.0, 0.0]], // 240
    &[[-0.5, 0.0, 0.0], [-0.25, 0.25, 0.25], [-0.125, 0.125, 0.125]], // 241
    &[[0.5, 0.0, 0.0], [0.25, -0.25, 0.25], [-0.125, 0.125, -0.125]], // 242
    &[[0.25, -0.25, 0.0], [0.25, -0.25, 0.0]], // 243
    &[[0.5, 0.0, 0.0], [-0.25, -0.25, 0.25], [-0.125, -0.125, 0.125]], // 244
    &[[-0.25, 0.0, 0.25], [-0.25, 0.0, 0.25]], // 245
    &[[0.125, 0.125, 0.125], [-0.125, 0.125, 0.125]], // 246
    &[[-0.125, 0.125, 0.125]], // 247
    &[[0.5, 0.0, -0.0], [0.25, 0.25, 0.25], [0.125, 0.125, 0.125]], // 248
    &[[0.125, -0.125, 0.125], [-0.125, -0.125, 0.125]], // 249
    &[[-0.25, -0.0, -0.25], [0.25, 0.0, 0.25]], // 250
    &[[0.125, -0.125, 0.125]], // 251
    &[[-0.25, -0.25, 0.0], [0.25, 0.25, -0.0]], // 252
    &[[-0.125, -0.125, 0.125]], // 253
    &[[0.125, 0.125, 0.125]], // 254
    &[[0.0, 0.0, 0.0]], // 255
];

/// Unit-spacing surfel normals for `code`.
///
/// # Example
///
/// ```
/// use surface_distance::normals_for_code;
///
/// // A single occupied corner is cut by one triangle.
/// assert_eq!(normals_for_code(1), &[[0.125, 0.125, 0.125]]);
/// assert_eq!(normals_for_code(0), &[[0.0, 0.0, 0.0]]);
/// ```
#[must_use]
pub fn normals_for_code(code: u8) -> &'static [[f64; 3]] {
    NEIGHBOUR_CODE_TO_NORMALS[usize::from(code)]
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn squared_norm(n: &[f64; 3]) -> f64 {
        n.iter().map(|c| c * c).sum()
    }

    #[test]
    fn test_fully_outside_and_inside_have_no_surface() {
        for code in [0u8, 255] {
            assert!(normals_for_code(code).iter().all(|n| squared_norm(n) == 0.0));
        }
    }

    #[test]
    fn test_every_border_code_has_surface() {
        for code in 1..=254u8 {
            let total: f64 = normals_for_code(code).iter().map(squared_norm).sum();
            assert!(total > 0.0, "code {code} has no surface");
        }
    }

    #[test]
    fn test_complementary_codes_share_geometry() {
        // Inverting occupancy flips orientation but keeps the triangles.
        for code in 0..=255u8 {
            let mut a: Vec<f64> = normals_for_code(code).iter().map(squared_norm).collect();
            let mut b: Vec<f64> = normals_for_code(!code).iter().map(squared_norm).collect();
            a.sort_by(f64::total_cmp);
            b.sort_by(f64::total_cmp);
            assert_eq!(a, b, "code {code} vs {}", !code);
        }
    }

    #[test]
    fn test_components_are_exact_eighths() {
        for code in 0..=255u8 {
            for n in normals_for_code(code) {
                for c in n {
                    assert_eq!((c * 8.0).fract(), 0.0, "code {code}: {c}");
                    assert!(c.abs() <= 0.5);
                }
            }
        }
    }

    #[test]
    fn test_at_most_four_triangles() {
        assert!((0..=255u8).all(|code| (1..=4).contains(&normals_for_code(code).len())));
    }
}
