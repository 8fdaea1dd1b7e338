//! Hand-tuned height profile of the opening run
//!
//! Heights are in pixels, y grows downward, so the run climbs toward negative y.

/// Initial curve samples, one per `point_spacing` pixels
pub const OPENING_PROFILE: &[f32] = &[
    0.0, -36.0, -15.0, -30.0, -18.0, -28.0, -20.0, -27.0, -22.0, -29.0, -25.0, -33.0, -28.0, -33.0,
    -29.0, -34.0, -29.0, -33.0, -30.0, -33.0, -32.0, -37.0, -34.0, -37.0, -34.0, -37.0, -34.0, -37.0,
    -34.0, -37.0, -35.0, -41.0, -41.0, -49.0, -49.0, -55.0, -56.0, -61.0, -60.0, -65.0, -64.0, -71.0,
    -74.0, -78.0, -81.0, -86.0, -85.0, -88.0, -88.0, -89.0, -88.0, -89.0, -87.0, -90.0, -87.0, -90.0,
    -87.0, -91.0, -90.0, -91.0, -90.0, -92.0, -89.0, -94.0, -96.0, -97.0, -96.0, -97.0, -98.0, -101.0,
    -99.0, -100.0, -101.0, -103.0, -104.0, -107.0, -108.0, -112.0, -117.0, -127.0, -127.0, -133.0, -133.0, -138.0,
    -138.0, -143.0, -140.0, -146.0, -139.0, -163.0, -175.0, -175.0, -178.0, -179.0, -179.0, -180.0, -182.0, -184.0,
    -186.0, -189.0, -189.0, -191.0, -192.0, -195.0, -196.0, -197.0, -197.0, -199.0, -200.0, -202.0, -202.0, -204.0,
    -205.0, -209.0, -210.0, -211.0, -214.0, -227.0, -231.0, -239.0, -242.0, -245.0, -245.0, -246.0, -246.0, -247.0,
    -246.0, -248.0, -249.0, -251.0, -252.0, -253.0, -252.0, -256.0, -256.0, -260.0, -262.0, -265.0, -264.0, -265.0,
    -264.0, -265.0, -264.0, -265.0, -262.0, -259.0, -255.0, -255.0, -253.0, -253.0, -250.0, -249.0, -244.0, -241.0,
    -239.0, -238.0, -234.0, -226.0, -218.0, -205.0, -192.0, -189.0, -184.0, -184.0, -182.0, -180.0, -177.0, -178.0,
    -177.0, -177.0, -173.0, -173.0, -170.0, -170.0, -168.0, -168.0, -167.0, -166.0, -165.0, -164.0, -163.0, -160.0,
    -158.0, -157.0, -156.0, -155.0, -154.0, -155.0, -154.0, -155.0, -154.0, -155.0, -155.0, -157.0, -157.0, -159.0,
    -158.0, -159.0, -158.0, -159.0, -158.0, -159.0, -158.0, -159.0, -158.0, -159.0, -157.0, -161.0, -163.0, -166.0,
    -167.0, -168.0, -170.0, -173.0, -173.0, -176.0, -177.0, -179.0, -179.0, -182.0, -186.0, -188.0, -191.0, -197.0,
    -198.0, -199.0, -200.0, -203.0, -205.0, -206.0, -207.0, -210.0, -210.0, -211.0, -210.0, -211.0, -212.0, -215.0,
    -216.0, -217.0, -217.0, -218.0, -217.0, -218.0, -219.0, -224.0, -225.0, -228.0, -229.0, -230.0, -229.0, -230.0,
    -229.0, -230.0, -229.0, -230.0, -229.0, -229.0, -227.0, -228.0, -226.0, -227.0, -226.0, -228.0, -229.0, -230.0,
    -229.0, -230.0, -229.0, -230.0, -231.0, -232.0, -235.0, -236.0, -237.0, -238.0, -239.0, -240.0, -241.0, -247.0,
    -249.0, -260.0, -262.0, -267.0, -270.0, -273.0, -273.0, -274.0, -273.0, -274.0, -273.0, -274.0, -273.0, -274.0,
    -273.0, -274.0, -273.0, -274.0, -273.0, -274.0, -272.0, -270.0, -267.0, -267.0, -265.0, -266.0, -265.0, -266.0,
    -265.0, -265.0, -262.0, -263.0, -261.0, -260.0, -257.0, -257.0, -254.0, -254.0, -252.0, -252.0, -250.0, -249.0,
    -246.0, -246.0, -245.0, -245.0, -243.0, -244.0, -245.0, -246.0, -245.0, -248.0, -249.0, -251.0, -252.0, -253.0,
    -252.0, -256.0, -257.0, -258.0, -257.0, -260.0, -260.0, -261.0, -261.0, -264.0, -266.0, -270.0, -271.0, -274.0,
    -275.0, -278.0, -279.0, -282.0, -283.0, -286.0, -289.0, -292.0, -293.0, -294.0, -295.0, -298.0, -299.0, -303.0,
    -303.0, -309.0, -313.0, -314.0, -323.0, -329.0, -335.0, -345.0, -345.0, -348.0, -349.0, -351.0, -350.0, -352.0,
    -353.0, -357.0, -358.0, -360.0, -361.0, -365.0, -366.0, -368.0, -367.0, -369.0, -369.0, -371.0, -371.0, -373.0,
    -377.0, -383.0, -384.0, -387.0, -387.0, -388.0, -391.0, -394.0, -402.0, -409.0, -413.0, -421.0, -423.0, -426.0,
    -426.0, -430.0, -431.0, -433.0, -433.0, -434.0, -433.0, -434.0, -435.0, -436.0, -435.0, -436.0, -435.0, -436.0,
    -435.0, -436.0, -435.0, -436.0, -435.0, -436.0, -434.0, -434.0, -431.0, -429.0, -426.0, -425.0, -421.0, -419.0,
    -418.0, -416.0, -414.0, -414.0, -413.0, -413.0, -410.0, -411.0, -410.0, -411.0, -410.0, -410.0, -406.0, -407.0,
    -405.0, -406.0, -405.0, -406.0, -405.0, -406.0, -406.0, -413.0, -415.0, -419.0, -422.0, -427.0, -429.0, -432.0,
    -434.0, -438.0, -442.0, -445.0, -446.0, -449.0, -451.0, -455.0, -459.0, -462.0, -465.0, -468.0, -473.0, -475.0,
    -479.0, -487.0, -487.0, -496.0, -497.0, -500.0, -502.0, -506.0, -508.0, -512.0, -515.0, -519.0, -519.0, -520.0,
    -520.0, -521.0, -522.0, -525.0, -524.0, -526.0, -526.0, -527.0, -529.0, -530.0, -529.0, -532.0, -531.0, -533.0,
    -535.0, -536.0, -535.0, -536.0, -536.0, -538.0, -537.0, -538.0, -537.0, -538.0, -538.0, -540.0, -541.0, -544.0,
    -545.0, -549.0, -550.0, -552.0, -555.0, -558.0, -561.0, -562.0, -564.0, -565.0, -566.0, -569.0, -571.0, -572.0,
    -574.0, -577.0, -576.0, -580.0, -580.0, -581.0, -582.0, -585.0, -585.0, -586.0, -586.0, -587.0, -588.0, -591.0,
    -590.0, -591.0, -590.0, -591.0, -591.0, -594.0, -593.0, -594.0, -595.0, -596.0, -595.0, -597.0, -599.0, -600.0,
    -599.0, -600.0, -599.0, -600.0, -599.0, -600.0, -596.0, -596.0, -594.0, -593.0, -591.0, -586.0, -585.0, -585.0,
    -583.0, -583.0, -581.0, -581.0, -580.0, -581.0, -580.0, -581.0, -580.0, -581.0, -580.0, -581.0, -580.0, -581.0,
    -580.0, -581.0, -580.0, -581.0, -580.0, -581.0, -580.0, -581.0, -580.0, -581.0, -580.0, -581.0, -580.0, -581.0,
    -580.0, -581.0, -580.0, -581.0, -580.0, -581.0, -584.0, -586.0, -590.0, -593.0, -593.0, -597.0, -598.0, -601.0,
    -602.0, -603.0, -602.0, -603.0, -603.0, -605.0, -604.0, -605.0, -604.0, -605.0, -604.0, -605.0, -604.0, -605.0,
    -604.0, -605.0, -604.0, -605.0, -604.0, -605.0, -604.0, -605.0, -604.0, -608.0, -608.0, -608.0, -608.0, -610.0,
    -611.0, -613.0, -613.0, -616.0, -616.0, -618.0, -618.0, -619.0, -620.0, -621.0, -622.0, -625.0, -627.0, -628.0,
    -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0,
    -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0, -627.0, -628.0,
    -627.0, -628.0, -627.0, -629.0, -633.0, -636.0, -638.0, -640.0, -641.0, -645.0, -646.0, -649.0, -649.0, -651.0,
    -652.0, -656.0, -658.0, -660.0, -661.0, -662.0, -665.0, -666.0, -667.0, -668.0, -667.0, -668.0, -667.0, -670.0,
    -670.0, -672.0, -673.0, -676.0, -678.0, -679.0, -682.0, -684.0, -686.0, -688.0, -690.0, -692.0, -695.0, -697.0,
    -699.0, -702.0, -705.0, -707.0, -709.0, -712.0, -715.0, -717.0, -719.0, -728.0, -742.0, -764.0, -768.0, -774.0,
    -778.0, -781.0, -785.0, -789.0, -790.0, -793.0, -793.0, -796.0, -798.0, -800.0, -802.0, -805.0, -807.0, -809.0,
    -808.0, -811.0, -811.0, -813.0, -812.0, -815.0, -814.0, -817.0, -819.0, -820.0, -820.0, -823.0, -825.0, -827.0,
    -828.0, -830.0, -830.0, -832.0, -831.0, -832.0, -833.0, -834.0, -836.0, -837.0, -836.0, -837.0, -836.0, -837.0,
    -836.0, -837.0, -836.0, -836.0, -835.0, -836.0, -835.0, -835.0, -833.0, -834.0, -833.0, -832.0, -831.0, -830.0,
    -829.0, -830.0, -829.0, -830.0, -829.0, -830.0, -826.0, -826.0, -823.0, -823.0, -814.0, -814.0, -806.0, -793.0,
    -793.0, -790.0, -789.0, -786.0, -784.0, -784.0, -782.0, -782.0, -781.0, -782.0, -782.0, -783.0, -782.0, -782.0,
    -784.0, -786.0, -788.0, -792.0, -794.0, -797.0, -798.0, -802.0, -804.0, -808.0, -809.0, -811.0, -813.0, -816.0,
    -818.0, -822.0, -825.0, -829.0, -837.0, -836.0, -845.0, -849.0, -854.0, -855.0, -860.0, -867.0, -868.0, -874.0,
    -881.0, -885.0, -891.0, -893.0, -894.0, -896.0, -895.0, -897.0, -898.0, -904.0, -905.0, -908.0, -908.0, -909.0,
    -908.0, -909.0, -908.0, -908.0, -905.0, -905.0, -902.0, -903.0, -902.0, -903.0, -902.0, -906.0, -908.0, -911.0,
    -913.0, -913.0, -915.0, -914.0, -915.0, -914.0, -915.0, -914.0, -915.0, -913.0, -913.0, -909.0, -906.0, -905.0,
    -905.0, -904.0, -902.0, -900.0, -897.0, -897.0, -895.0, -899.0, -901.0, -906.0, -908.0, -913.0, -919.0, -921.0,
    -921.0, -925.0, -930.0, -932.0, -945.0, -946.0, -947.0, -949.0, -950.0, -949.0, -950.0, -949.0, -950.0, -949.0,
    -950.0, -949.0, -950.0, -948.0, -947.0, -946.0, -944.0, -944.0, -941.0, -941.0, -940.0, -941.0, -940.0, -942.0,
    -943.0, -942.0, -945.0, -946.0, -947.0, -949.0, -951.0, -952.0, -953.0, -956.0, -957.0, -959.0, -959.0, -961.0,
    -963.0, -964.0, -966.0, -966.0, -968.0, -969.0, -974.0, -976.0, -978.0, -978.0, -978.0, -978.0, -978.0, -978.0,
    -978.0, -978.0, -978.0, -977.0, -977.0, -975.0, -973.0, -970.0, -971.0, -970.0, -971.0, -970.0, -971.0, -970.0,
    -972.0, -969.0, -972.0, -969.0,
];
