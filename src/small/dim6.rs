//! 6×6 kernel.
//!
//! Three tiers of shared sub-determinants: `t1..t15` are the 2×2 minors of
//! the bottom two rows, `t16..t35` the 3×3 minors one row up, `t36..t50` the
//! 4×4 minors feeding the cofactors. The whole set is recomputed from the top
//! two rows when the expansion switches to the right-hand adjugate columns.

use num_complex::Complex64;

pub(crate) fn det6(a: &[Vec<Complex64>]) -> Complex64 {
    let t1 = a[4][4] * a[5][5] - a[4][5] * a[5][4];
    let t2 = a[4][3] * a[5][5] - a[4][5] * a[5][3];
    let t3 = a[4][3] * a[5][4] - a[4][4] * a[5][3];
    let t4 = a[4][2] * a[5][5] - a[4][5] * a[5][2];
    let t5 = a[4][2] * a[5][4] - a[4][4] * a[5][2];
    let t6 = a[4][2] * a[5][3] - a[4][3] * a[5][2];
    let t7 = a[4][1] * a[5][5] - a[4][5] * a[5][1];
    let t8 = a[4][1] * a[5][4] - a[4][4] * a[5][1];
    let t9 = a[4][1] * a[5][3] - a[4][3] * a[5][1];
    let t10 = a[4][1] * a[5][2] - a[4][2] * a[5][1];
    let t11 = a[4][0] * a[5][5] - a[4][5] * a[5][0];
    let t12 = a[4][0] * a[5][4] - a[4][4] * a[5][0];
    let t13 = a[4][0] * a[5][3] - a[4][3] * a[5][0];
    let t14 = a[4][0] * a[5][2] - a[4][2] * a[5][0];
    let t15 = a[4][0] * a[5][1] - a[4][1] * a[5][0];

    let t16 = a[3][3] * t1 - a[3][4] * t2 + a[3][5] * t3;
    let t17 = a[3][2] * t1 - a[3][4] * t4 + a[3][5] * t5;
    let t18 = a[3][2] * t2 - a[3][3] * t4 + a[3][5] * t6;
    let t19 = a[3][2] * t3 - a[3][3] * t5 + a[3][4] * t6;
    let t20 = a[3][1] * t1 - a[3][4] * t7 + a[3][5] * t8;
    let t21 = a[3][1] * t2 - a[3][3] * t7 + a[3][5] * t9;
    let t22 = a[3][1] * t3 - a[3][3] * t8 + a[3][4] * t9;
    let t23 = a[3][1] * t4 - a[3][2] * t7 + a[3][5] * t10;
    let t24 = a[3][1] * t5 - a[3][2] * t8 + a[3][4] * t10;
    let t25 = a[3][1] * t6 - a[3][2] * t9 + a[3][3] * t10;
    let t26 = a[3][0] * t1 - a[3][4] * t11 + a[3][5] * t12;
    let t27 = a[3][0] * t2 - a[3][3] * t11 + a[3][5] * t13;
    let t28 = a[3][0] * t3 - a[3][3] * t12 + a[3][4] * t13;
    let t29 = a[3][0] * t4 - a[3][2] * t11 + a[3][5] * t14;
    let t30 = a[3][0] * t5 - a[3][2] * t12 + a[3][4] * t14;
    let t31 = a[3][0] * t6 - a[3][2] * t13 + a[3][3] * t14;
    let t32 = a[3][0] * t7 - a[3][1] * t11 + a[3][5] * t15;
    let t33 = a[3][0] * t8 - a[3][1] * t12 + a[3][4] * t15;
    let t34 = a[3][0] * t9 - a[3][1] * t13 + a[3][3] * t15;
    let t35 = a[3][0] * t10 - a[3][1] * t14 + a[3][2] * t15;

    let t36 = a[2][2] * t16 - a[2][3] * t17 + a[2][4] * t18 - a[2][5] * t19;
    let t37 = a[2][1] * t16 - a[2][3] * t20 + a[2][4] * t21 - a[2][5] * t22;
    let t38 = a[2][1] * t17 - a[2][2] * t20 + a[2][4] * t23 - a[2][5] * t24;
    let t39 = a[2][1] * t18 - a[2][2] * t21 + a[2][3] * t23 - a[2][5] * t25;
    let t40 = a[2][1] * t19 - a[2][2] * t22 + a[2][3] * t24 - a[2][4] * t25;
    let t41 = a[2][0] * t16 - a[2][3] * t26 + a[2][4] * t27 - a[2][5] * t28;
    let t42 = a[2][0] * t17 - a[2][2] * t26 + a[2][4] * t29 - a[2][5] * t30;
    let t43 = a[2][0] * t18 - a[2][2] * t27 + a[2][3] * t29 - a[2][5] * t31;
    let t44 = a[2][0] * t19 - a[2][2] * t28 + a[2][3] * t30 - a[2][4] * t31;

    let b0 = a[1][1] * t36 - a[1][2] * t37 + a[1][3] * t38 - a[1][4] * t39 + a[1][5] * t40;
    let b1 = -a[1][0] * t36 + a[1][2] * t41 - a[1][3] * t42 + a[1][4] * t43 - a[1][5] * t44;

    let t45 = a[2][0] * t20 - a[2][1] * t26 + a[2][4] * t32 - a[2][5] * t33;
    let t46 = a[2][0] * t21 - a[2][1] * t27 + a[2][3] * t32 - a[2][5] * t34;
    let t47 = a[2][0] * t22 - a[2][1] * t28 + a[2][3] * t33 - a[2][4] * t34;
    let t48 = a[2][0] * t23 - a[2][1] * t29 + a[2][2] * t32 - a[2][5] * t35;
    let t49 = a[2][0] * t24 - a[2][1] * t30 + a[2][2] * t33 - a[2][4] * t35;

    let b2 = a[1][0] * t37 - a[1][1] * t41 + a[1][3] * t45 - a[1][4] * t46 + a[1][5] * t47;
    let b3 = -a[1][0] * t38 + a[1][1] * t42 - a[1][2] * t45 + a[1][4] * t48 - a[1][5] * t49;

    let t50 = a[2][0] * t25 - a[2][1] * t31 + a[2][2] * t34 - a[2][3] * t35;

    let b4 = a[1][0] * t39 - a[1][1] * t43 + a[1][2] * t46 - a[1][3] * t48 + a[1][5] * t50;
    let b5 = -a[1][0] * t40 + a[1][1] * t44 - a[1][2] * t47 + a[1][3] * t49 - a[1][4] * t50;

    a[0][0] * b0 + a[0][1] * b1 + a[0][2] * b2 + a[0][3] * b3 + a[0][4] * b4 + a[0][5] * b5
}

pub(crate) fn invert6(a: &[Vec<Complex64>], b: &mut [Vec<Complex64>]) {
    let mut t1 = a[4][4] * a[5][5] - a[4][5] * a[5][4];
    let mut t2 = a[4][3] * a[5][5] - a[4][5] * a[5][3];
    let mut t3 = a[4][3] * a[5][4] - a[4][4] * a[5][3];
    let mut t4 = a[4][2] * a[5][5] - a[4][5] * a[5][2];
    let mut t5 = a[4][2] * a[5][4] - a[4][4] * a[5][2];
    let mut t6 = a[4][2] * a[5][3] - a[4][3] * a[5][2];
    let mut t7 = a[4][1] * a[5][5] - a[4][5] * a[5][1];
    let mut t8 = a[4][1] * a[5][4] - a[4][4] * a[5][1];
    let mut t9 = a[4][1] * a[5][3] - a[4][3] * a[5][1];
    let mut t10 = a[4][1] * a[5][2] - a[4][2] * a[5][1];
    let mut t11 = a[4][0] * a[5][5] - a[4][5] * a[5][0];
    let mut t12 = a[4][0] * a[5][4] - a[4][4] * a[5][0];
    let mut t13 = a[4][0] * a[5][3] - a[4][3] * a[5][0];
    let mut t14 = a[4][0] * a[5][2] - a[4][2] * a[5][0];
    let mut t15 = a[4][0] * a[5][1] - a[4][1] * a[5][0];

    let mut t16 = a[3][3] * t1 - a[3][4] * t2 + a[3][5] * t3;
    let mut t17 = a[3][2] * t1 - a[3][4] * t4 + a[3][5] * t5;
    let mut t18 = a[3][2] * t2 - a[3][3] * t4 + a[3][5] * t6;
    let mut t19 = a[3][2] * t3 - a[3][3] * t5 + a[3][4] * t6;
    let mut t20 = a[3][1] * t1 - a[3][4] * t7 + a[3][5] * t8;
    let mut t21 = a[3][1] * t2 - a[3][3] * t7 + a[3][5] * t9;
    let mut t22 = a[3][1] * t3 - a[3][3] * t8 + a[3][4] * t9;
    let mut t23 = a[3][1] * t4 - a[3][2] * t7 + a[3][5] * t10;
    let mut t24 = a[3][1] * t5 - a[3][2] * t8 + a[3][4] * t10;
    let mut t25 = a[3][1] * t6 - a[3][2] * t9 + a[3][3] * t10;
    let mut t26 = a[3][0] * t1 - a[3][4] * t11 + a[3][5] * t12;
    let mut t27 = a[3][0] * t2 - a[3][3] * t11 + a[3][5] * t13;
    let mut t28 = a[3][0] * t3 - a[3][3] * t12 + a[3][4] * t13;
    let mut t29 = a[3][0] * t4 - a[3][2] * t11 + a[3][5] * t14;
    let mut t30 = a[3][0] * t5 - a[3][2] * t12 + a[3][4] * t14;
    let mut t31 = a[3][0] * t6 - a[3][2] * t13 + a[3][3] * t14;
    let mut t32 = a[3][0] * t7 - a[3][1] * t11 + a[3][5] * t15;
    let mut t33 = a[3][0] * t8 - a[3][1] * t12 + a[3][4] * t15;
    let mut t34 = a[3][0] * t9 - a[3][1] * t13 + a[3][3] * t15;
    let mut t35 = a[3][0] * t10 - a[3][1] * t14 + a[3][2] * t15;

    let mut t36 = a[2][2] * t16 - a[2][3] * t17 + a[2][4] * t18 - a[2][5] * t19;
    let mut t37 = a[2][1] * t16 - a[2][3] * t20 + a[2][4] * t21 - a[2][5] * t22;
    let mut t38 = a[2][1] * t17 - a[2][2] * t20 + a[2][4] * t23 - a[2][5] * t24;
    let mut t39 = a[2][1] * t18 - a[2][2] * t21 + a[2][3] * t23 - a[2][5] * t25;
    let mut t40 = a[2][1] * t19 - a[2][2] * t22 + a[2][3] * t24 - a[2][4] * t25;
    let mut t41 = a[2][0] * t16 - a[2][3] * t26 + a[2][4] * t27 - a[2][5] * t28;
    let mut t42 = a[2][0] * t17 - a[2][2] * t26 + a[2][4] * t29 - a[2][5] * t30;
    let mut t43 = a[2][0] * t18 - a[2][2] * t27 + a[2][3] * t29 - a[2][5] * t31;
    let mut t44 = a[2][0] * t19 - a[2][2] * t28 + a[2][3] * t30 - a[2][4] * t31;

    b[0][0] = a[1][1] * t36 - a[1][2] * t37 + a[1][3] * t38 - a[1][4] * t39 + a[1][5] * t40;
    b[0][1] = -a[0][1] * t36 + a[0][2] * t37 - a[0][3] * t38 + a[0][4] * t39 - a[0][5] * t40;
    b[1][0] = -a[1][0] * t36 + a[1][2] * t41 - a[1][3] * t42 + a[1][4] * t43 - a[1][5] * t44;
    b[1][1] = a[0][0] * t36 - a[0][2] * t41 + a[0][3] * t42 - a[0][4] * t43 + a[0][5] * t44;

    let mut t45 = a[2][0] * t20 - a[2][1] * t26 + a[2][4] * t32 - a[2][5] * t33;
    let mut t46 = a[2][0] * t21 - a[2][1] * t27 + a[2][3] * t32 - a[2][5] * t34;
    let mut t47 = a[2][0] * t22 - a[2][1] * t28 + a[2][3] * t33 - a[2][4] * t34;
    let mut t48 = a[2][0] * t23 - a[2][1] * t29 + a[2][2] * t32 - a[2][5] * t35;
    let mut t49 = a[2][0] * t24 - a[2][1] * t30 + a[2][2] * t33 - a[2][4] * t35;

    b[2][0] = a[1][0] * t37 - a[1][1] * t41 + a[1][3] * t45 - a[1][4] * t46 + a[1][5] * t47;
    b[2][1] = -a[0][0] * t37 + a[0][1] * t41 - a[0][3] * t45 + a[0][4] * t46 - a[0][5] * t47;
    b[3][0] = -a[1][0] * t38 + a[1][1] * t42 - a[1][2] * t45 + a[1][4] * t48 - a[1][5] * t49;
    b[3][1] = a[0][0] * t38 - a[0][1] * t42 + a[0][2] * t45 - a[0][4] * t48 + a[0][5] * t49;

    let mut t50 = a[2][0] * t25 - a[2][1] * t31 + a[2][2] * t34 - a[2][3] * t35;

    b[4][0] = a[1][0] * t39 - a[1][1] * t43 + a[1][2] * t46 - a[1][3] * t48 + a[1][5] * t50;
    b[4][1] = -a[0][0] * t39 + a[0][1] * t43 - a[0][2] * t46 + a[0][3] * t48 - a[0][5] * t50;
    b[5][0] = -a[1][0] * t40 + a[1][1] * t44 - a[1][2] * t47 + a[1][3] * t49 - a[1][4] * t50;
    b[5][1] = a[0][0] * t40 - a[0][1] * t44 + a[0][2] * t47 - a[0][3] * t49 + a[0][4] * t50;

    t36 = a[1][2] * t16 - a[1][3] * t17 + a[1][4] * t18 - a[1][5] * t19;
    t37 = a[1][1] * t16 - a[1][3] * t20 + a[1][4] * t21 - a[1][5] * t22;
    t38 = a[1][1] * t17 - a[1][2] * t20 + a[1][4] * t23 - a[1][5] * t24;
    t39 = a[1][1] * t18 - a[1][2] * t21 + a[1][3] * t23 - a[1][5] * t25;
    t40 = a[1][1] * t19 - a[1][2] * t22 + a[1][3] * t24 - a[1][4] * t25;
    t41 = a[1][0] * t16 - a[1][3] * t26 + a[1][4] * t27 - a[1][5] * t28;
    t42 = a[1][0] * t17 - a[1][2] * t26 + a[1][4] * t29 - a[1][5] * t30;
    t43 = a[1][0] * t18 - a[1][2] * t27 + a[1][3] * t29 - a[1][5] * t31;
    t44 = a[1][0] * t19 - a[1][2] * t28 + a[1][3] * t30 - a[1][4] * t31;
    t45 = a[1][0] * t20 - a[1][1] * t26 + a[1][4] * t32 - a[1][5] * t33;
    t46 = a[1][0] * t21 - a[1][1] * t27 + a[1][3] * t32 - a[1][5] * t34;
    t47 = a[1][0] * t22 - a[1][1] * t28 + a[1][3] * t33 - a[1][4] * t34;
    t48 = a[1][0] * t23 - a[1][1] * t29 + a[1][2] * t32 - a[1][5] * t35;
    t49 = a[1][0] * t24 - a[1][1] * t30 + a[1][2] * t33 - a[1][4] * t35;
    t50 = a[1][0] * t25 - a[1][1] * t31 + a[1][2] * t34 - a[1][3] * t35;

    b[0][2] = a[0][1] * t36 - a[0][2] * t37 + a[0][3] * t38 - a[0][4] * t39 + a[0][5] * t40;
    b[1][2] = -a[0][0] * t36 + a[0][2] * t41 - a[0][3] * t42 + a[0][4] * t43 - a[0][5] * t44;
    b[2][2] = a[0][0] * t37 - a[0][1] * t41 + a[0][3] * t45 - a[0][4] * t46 + a[0][5] * t47;
    b[3][2] = -a[0][0] * t38 + a[0][1] * t42 - a[0][2] * t45 + a[0][4] * t48 - a[0][5] * t49;
    b[4][2] = a[0][0] * t39 - a[0][1] * t43 + a[0][2] * t46 - a[0][3] * t48 + a[0][5] * t50;
    b[5][2] = -a[0][0] * t40 + a[0][1] * t44 - a[0][2] * t47 + a[0][3] * t49 - a[0][4] * t50;

    t1 = a[0][3] * a[1][4] - a[0][4] * a[1][3];
    t2 = a[0][2] * a[1][4] - a[0][4] * a[1][2];
    t3 = a[0][2] * a[1][3] - a[0][3] * a[1][2];
    t4 = a[0][1] * a[1][4] - a[0][4] * a[1][1];
    t5 = a[0][1] * a[1][3] - a[0][3] * a[1][1];
    t6 = a[0][1] * a[1][2] - a[0][2] * a[1][1];
    t7 = a[0][0] * a[1][4] - a[0][4] * a[1][0];
    t8 = a[0][0] * a[1][3] - a[0][3] * a[1][0];
    t9 = a[0][0] * a[1][2] - a[0][2] * a[1][0];
    t10 = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    t11 = a[0][3] * a[1][5] - a[0][5] * a[1][3];
    t12 = a[0][2] * a[1][5] - a[0][5] * a[1][2];
    t13 = a[0][1] * a[1][5] - a[0][5] * a[1][1];
    t14 = a[0][0] * a[1][5] - a[0][5] * a[1][0];
    t15 = a[0][4] * a[1][5] - a[0][5] * a[1][4];

    t16 = a[2][3] * t15 - a[2][4] * t11 + a[2][5] * t1;
    t17 = a[2][2] * t15 - a[2][4] * t12 + a[2][5] * t2;
    t18 = a[2][2] * t11 - a[2][3] * t12 + a[2][5] * t3;
    t19 = a[2][2] * t1 - a[2][3] * t2 + a[2][4] * t3;
    t20 = a[2][1] * t15 - a[2][4] * t13 + a[2][5] * t4;
    t21 = a[2][1] * t11 - a[2][3] * t13 + a[2][5] * t5;
    t22 = a[2][1] * t1 - a[2][3] * t4 + a[2][4] * t5;
    t23 = a[2][1] * t12 - a[2][2] * t13 + a[2][5] * t6;
    t24 = a[2][1] * t2 - a[2][2] * t4 + a[2][4] * t6;
    t25 = a[2][1] * t3 - a[2][2] * t5 + a[2][3] * t6;
    t26 = a[2][0] * t15 - a[2][4] * t14 + a[2][5] * t7;
    t27 = a[2][0] * t11 - a[2][3] * t14 + a[2][5] * t8;
    t28 = a[2][0] * t1 - a[2][3] * t7 + a[2][4] * t8;
    t29 = a[2][0] * t12 - a[2][2] * t14 + a[2][5] * t9;
    t30 = a[2][0] * t2 - a[2][2] * t7 + a[2][4] * t9;
    t31 = a[2][0] * t3 - a[2][2] * t8 + a[2][3] * t9;
    t32 = a[2][0] * t13 - a[2][1] * t14 + a[2][5] * t10;
    t33 = a[2][0] * t4 - a[2][1] * t7 + a[2][4] * t10;
    t34 = a[2][0] * t5 - a[2][1] * t8 + a[2][3] * t10;
    t35 = a[2][0] * t6 - a[2][1] * t9 + a[2][2] * t10;

    t36 = a[3][2] * t16 - a[3][3] * t17 + a[3][4] * t18 - a[3][5] * t19;
    t37 = a[3][1] * t16 - a[3][3] * t20 + a[3][4] * t21 - a[3][5] * t22;
    t38 = a[3][1] * t17 - a[3][2] * t20 + a[3][4] * t23 - a[3][5] * t24;
    t39 = a[3][1] * t18 - a[3][2] * t21 + a[3][3] * t23 - a[3][5] * t25;
    t40 = a[3][1] * t19 - a[3][2] * t22 + a[3][3] * t24 - a[3][4] * t25;
    t41 = a[3][0] * t16 - a[3][3] * t26 + a[3][4] * t27 - a[3][5] * t28;
    t42 = a[3][0] * t17 - a[3][2] * t26 + a[3][4] * t29 - a[3][5] * t30;
    t43 = a[3][0] * t18 - a[3][2] * t27 + a[3][3] * t29 - a[3][5] * t31;
    t44 = a[3][0] * t19 - a[3][2] * t28 + a[3][3] * t30 - a[3][4] * t31;

    b[0][4] = -a[5][1] * t36 + a[5][2] * t37 - a[5][3] * t38 + a[5][4] * t39 - a[5][5] * t40;
    b[0][5] = a[4][1] * t36 - a[4][2] * t37 + a[4][3] * t38 - a[4][4] * t39 + a[4][5] * t40;
    b[1][4] = a[5][0] * t36 - a[5][2] * t41 + a[5][3] * t42 - a[5][4] * t43 + a[5][5] * t44;
    b[1][5] = -a[4][0] * t36 + a[4][2] * t41 - a[4][3] * t42 + a[4][4] * t43 - a[4][5] * t44;

    t45 = a[3][0] * t20 - a[3][1] * t26 + a[3][4] * t32 - a[3][5] * t33;
    t46 = a[3][0] * t21 - a[3][1] * t27 + a[3][3] * t32 - a[3][5] * t34;
    t47 = a[3][0] * t22 - a[3][1] * t28 + a[3][3] * t33 - a[3][4] * t34;
    t48 = a[3][0] * t23 - a[3][1] * t29 + a[3][2] * t32 - a[3][5] * t35;
    t49 = a[3][0] * t24 - a[3][1] * t30 + a[3][2] * t33 - a[3][4] * t35;

    b[2][4] = -a[5][0] * t37 + a[5][1] * t41 - a[5][3] * t45 + a[5][4] * t46 - a[5][5] * t47;
    b[2][5] = a[4][0] * t37 - a[4][1] * t41 + a[4][3] * t45 - a[4][4] * t46 + a[4][5] * t47;
    b[3][4] = a[5][0] * t38 - a[5][1] * t42 + a[5][2] * t45 - a[5][4] * t48 + a[5][5] * t49;
    b[3][5] = -a[4][0] * t38 + a[4][1] * t42 - a[4][2] * t45 + a[4][4] * t48 - a[4][5] * t49;

    t50 = a[3][0] * t25 - a[3][1] * t31 + a[3][2] * t34 - a[3][3] * t35;

    b[4][4] = -a[5][0] * t39 + a[5][1] * t43 - a[5][2] * t46 + a[5][3] * t48 - a[5][5] * t50;
    b[4][5] = a[4][0] * t39 - a[4][1] * t43 + a[4][2] * t46 - a[4][3] * t48 + a[4][5] * t50;
    b[5][4] = a[5][0] * t40 - a[5][1] * t44 + a[5][2] * t47 - a[5][3] * t49 + a[5][4] * t50;
    b[5][5] = -a[4][0] * t40 + a[4][1] * t44 - a[4][2] * t47 + a[4][3] * t49 - a[4][4] * t50;

    t36 = a[4][2] * t16 - a[4][3] * t17 + a[4][4] * t18 - a[4][5] * t19;
    t37 = a[4][1] * t16 - a[4][3] * t20 + a[4][4] * t21 - a[4][5] * t22;
    t38 = a[4][1] * t17 - a[4][2] * t20 + a[4][4] * t23 - a[4][5] * t24;
    t39 = a[4][1] * t18 - a[4][2] * t21 + a[4][3] * t23 - a[4][5] * t25;
    t40 = a[4][1] * t19 - a[4][2] * t22 + a[4][3] * t24 - a[4][4] * t25;
    t41 = a[4][0] * t16 - a[4][3] * t26 + a[4][4] * t27 - a[4][5] * t28;
    t42 = a[4][0] * t17 - a[4][2] * t26 + a[4][4] * t29 - a[4][5] * t30;
    t43 = a[4][0] * t18 - a[4][2] * t27 + a[4][3] * t29 - a[4][5] * t31;
    t44 = a[4][0] * t19 - a[4][2] * t28 + a[4][3] * t30 - a[4][4] * t31;
    t45 = a[4][0] * t20 - a[4][1] * t26 + a[4][4] * t32 - a[4][5] * t33;
    t46 = a[4][0] * t21 - a[4][1] * t27 + a[4][3] * t32 - a[4][5] * t34;
    t47 = a[4][0] * t22 - a[4][1] * t28 + a[4][3] * t33 - a[4][4] * t34;
    t48 = a[4][0] * t23 - a[4][1] * t29 + a[4][2] * t32 - a[4][5] * t35;
    t49 = a[4][0] * t24 - a[4][1] * t30 + a[4][2] * t33 - a[4][4] * t35;
    t50 = a[4][0] * t25 - a[4][1] * t31 + a[4][2] * t34 - a[4][3] * t35;

    b[0][3] = a[5][1] * t36 - a[5][2] * t37 + a[5][3] * t38 - a[5][4] * t39 + a[5][5] * t40;
    b[1][3] = -a[5][0] * t36 + a[5][2] * t41 - a[5][3] * t42 + a[5][4] * t43 - a[5][5] * t44;
    b[2][3] = a[5][0] * t37 - a[5][1] * t41 + a[5][3] * t45 - a[5][4] * t46 + a[5][5] * t47;
    b[3][3] = -a[5][0] * t38 + a[5][1] * t42 - a[5][2] * t45 + a[5][4] * t48 - a[5][5] * t49;
    b[4][3] = a[5][0] * t39 - a[5][1] * t43 + a[5][2] * t46 - a[5][3] * t48 + a[5][5] * t50;
    b[5][3] = -a[5][0] * t40 + a[5][1] * t44 - a[5][2] * t47 + a[5][3] * t49 - a[5][4] * t50;

    let det = a[0][0] * b[0][0]
        + a[0][1] * b[1][0]
        + a[0][2] * b[2][0]
        + a[0][3] * b[3][0]
        + a[0][4] * b[4][0]
        + a[0][5] * b[5][0];

    for i in 0..6 {
        for j in 0..6 {
            b[i][j] /= det;
        }
    }
}
