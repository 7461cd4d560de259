//! Lazy registry of named curves.
//!
//! Grounded on `examples/original_source/ecc/CurveDB.py`'s `register_lazy`
//! calls: every curve below is built from the exact decimal parameters
//! extracted from that file (brainpool, prime*, secp*, wap-wsg-idm-ecid*,
//! the SafeCurves entries, and curve25519/ed25519). Each curve is built and
//! validated at most once; the registry caches the resulting `Arc<Curve>`
//! behind a lock rather than eagerly constructing all 57 at startup.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use num_bigint::{BigInt, BigUint};
use num_traits::Num;

use crate::curve::{Curve, CurveParams, EdDsaHash, EdDsaParams, EdDsaQuirk};
use crate::error::{Error, Result};

type Builder = fn() -> Result<Arc<Curve>>;

fn parse_uint(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 10).expect("embedded curve constant is valid decimal")
}

fn parse_int(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 10).expect("embedded curve constant is valid decimal")
}

fn build_brainpoolp160r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1332297598440044874827085558802491743757193798159"),
        n: parse_uint("1332297598440044874827085038830181364212942568457"),
        h: parse_uint("1"),
        generator: Some((parse_int("1089473557631435284577962539738532515920566082499"), parse_int("127912481829969033206777085249718746721365418785"))),
        name: Some("brainpoolP160r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("297190522446607939568481567949428902921613329152"), parse_int("173245649450172891208247283053495198538671808088"), params)
}

fn build_brainpoolp160t1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1332297598440044874827085558802491743757193798159"),
        n: parse_uint("1332297598440044874827085038830181364212942568457"),
        h: parse_uint("1"),
        generator: Some((parse_int("1013918819608769552616977083272059630517089149816"), parse_int("992437653978037713070561264469524978381944905901"))),
        name: Some("brainpoolP160t1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("1332297598440044874827085558802491743757193798156"), parse_int("698401795719474705027684479972917623041381757824"), params)
}

fn build_brainpoolp192r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("4781668983906166242955001894344923773259119655253013193367"),
        n: parse_uint("4781668983906166242955001894269038308119863659119834868929"),
        h: parse_uint("1"),
        generator: Some((parse_int("4723188856514392935399337699153522173525168621081341681622"), parse_int("507884783101387741749746950209061101579755255809652136847"))),
        name: Some("brainpoolP192r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("2613009377683017747869391908421543348309181741502784219375"), parse_int("1731160591135112004210203499537764623771657619977468323273"), params)
}

fn build_brainpoolp192t1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("4781668983906166242955001894344923773259119655253013193367"),
        n: parse_uint("4781668983906166242955001894269038308119863659119834868929"),
        h: parse_uint("1"),
        generator: Some((parse_int("1444558712667280506885530592978306040338136913835324440873"), parse_int("232764348904945951820395534722141373682806994795615748553"))),
        name: Some("brainpoolP192t1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("4781668983906166242955001894344923773259119655253013193364"), parse_int("486321888066950067394881041525590797530120076120499518329"), params)
}

fn build_brainpoolp224r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("22721622932454352787552537995910928073340732145944992304435472941311"),
        n: parse_uint("22721622932454352787552537995910923612567546342330757191396560966559"),
        h: parse_uint("1"),
        generator: Some((parse_int("1428364927244201726431498207475486496993067267318520844137448783997"), parse_int("9337555360448823227812410753177468631215558779020518084752618816205"))),
        name: Some("brainpoolP224r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("11020725272625742361946480833014344015343456918668456061589001510723"), parse_int("3949606626053374030787926457695139766118442946052311411513528958987"), params)
}

fn build_brainpoolp224t1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("22721622932454352787552537995910928073340732145944992304435472941311"),
        n: parse_uint("22721622932454352787552537995910923612567546342330757191396560966559"),
        h: parse_uint("1"),
        generator: Some((parse_int("11236281700362234642592534287151572422539408672654616227474732012928"), parse_int("364032462118593425315751587028126980694396626774408344039871404876"))),
        name: Some("brainpoolP224t1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("22721622932454352787552537995910928073340732145944992304435472941308"), parse_int("7919603849831377222129533323916957959225380016698795812027476510861"), params)
}

fn build_brainpoolp256r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("76884956397045344220809746629001649093037950200943055203735601445031516197751"),
        n: parse_uint("76884956397045344220809746629001649092737531784414529538755519063063536359079"),
        h: parse_uint("1"),
        generator: Some((parse_int("63243729749562333355292243550312970334778175571054726587095381623627144114786"), parse_int("38218615093753523893122277964030810387585405539772602581557831887485717997975"))),
        name: Some("brainpoolP256r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("56698187605326110043627228396178346077120614539475214109386828188763884139993"), parse_int("17577232497321838841075697789794520262950426058923084567046852300633325438902"), params)
}

fn build_brainpoolp256t1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("76884956397045344220809746629001649093037950200943055203735601445031516197751"),
        n: parse_uint("76884956397045344220809746629001649092737531784414529538755519063063536359079"),
        h: parse_uint("1"),
        generator: Some((parse_int("74138526386500101787937404544159543470173440588427591213843535686338908194292"), parse_int("20625154686056605250529482107801269759951443923312408063441227608803066104254"))),
        name: Some("brainpoolP256t1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("76884956397045344220809746629001649093037950200943055203735601445031516197748"), parse_int("46214326585032579593829631435610129746736367449296220983687490401182983727876"), params)
}

fn build_brainpoolp320r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1763593322239166354161909842446019520889512772719515192772960415288640868802149818095501499903527"),
        n: parse_uint("1763593322239166354161909842446019520889512772717686063760686124016784784845843468355685258203921"),
        h: parse_uint("1"),
        generator: Some((parse_int("565203972584199378547773331021708157952136817703497461781479793049434111597020229546183313458705"), parse_int("175146432689526447697480803229621572834859050903464782210773312572877763380340633688906597830369"))),
        name: Some("brainpoolP320r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("524709318439392693105919717518043758943240164412117372990311331314771510648804065756354311491252"), parse_int("684460840191207052139729091116995410883497412720006364295713596062999867796741135919289734394278"), params)
}

fn build_brainpoolp320t1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1763593322239166354161909842446019520889512772719515192772960415288640868802149818095501499903527"),
        n: parse_uint("1763593322239166354161909842446019520889512772717686063760686124016784784845843468355685258203921"),
        h: parse_uint("1"),
        generator: Some((parse_int("1221175819973001316491038958226563119032598033059331804921649457916311604176688737745420093746514"), parse_int("832095900618272253462376182163435186143818309959785348829039065198217071225345202726924484399811"))),
        name: Some("brainpoolP320t1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("1763593322239166354161909842446019520889512772719515192772960415288640868802149818095501499903524"), parse_int("1401395435032847536924656852322353441447762422733674743806973258207878888547540276867732868432723"), params)
}

fn build_brainpoolp384r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("21659270770119316173069236842332604979796116387017648600081618503821089934025961822236561982844534088440708417973331"),
        n: parse_uint("21659270770119316173069236842332604979796116387017648600075645274821611501358515537962695117368903252229601718723941"),
        h: parse_uint("1"),
        generator: Some((parse_int("4480579927441533893329522230328287337018133311029754539518372936441756157459087304048546502931308754738349656551198"), parse_int("21354446258743982691371413536748675410974765754620216137225614281636810686961198361153695003859088327367976229294869"))),
        name: Some("brainpoolP384r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("19048979039598244295279281525021548448223459855185222892089532512446337024935426033638342846977861914875721218402342"), parse_int("717131854892629093329172042053689661426642816397448020844407951239049616491589607702456460799758882466071646850065"), params)
}

fn build_brainpoolp384t1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("21659270770119316173069236842332604979796116387017648600081618503821089934025961822236561982844534088440708417973331"),
        n: parse_uint("21659270770119316173069236842332604979796116387017648600075645274821611501358515537962695117368903252229601718723941"),
        h: parse_uint("1"),
        generator: Some((parse_int("3827769047710394604076870463731979903132904572714069494181204655675960538951736634566672590576020545838501853661388"), parse_int("5797643717699939326787282953388004860198302425468870641753455602553471777319089854136002629714659021021358409132328"))),
        name: Some("brainpoolP384t1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("21659270770119316173069236842332604979796116387017648600081618503821089934025961822236561982844534088440708417973328"), parse_int("19596161053329239268181228455226581162286252326261019516900162717091837027531392576647644262320816848087868142547438"), params)
}

fn build_brainpoolp512r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("8948962207650232551656602815159153422162609644098354511344597187200057010413552439917934304191956942765446530386427345937963894309923928536070534607816947"),
        n: parse_uint("8948962207650232551656602815159153422162609644098354511344597187200057010413418528378981730643524959857451398370029280583094215613882043973354392115544169"),
        h: parse_uint("1"),
        generator: Some((parse_int("6792059140424575174435640431269195087843153390102521881468023012732047482579853077545647446272866794936371522410774532686582484617946013928874296844351522"), parse_int("6592244555240112873324748381429610341312712940326266331327445066687010545415256461097707483288650216992613090185042957716318301180159234788504307628509330"))),
        name: Some("brainpoolP512r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("6294860557973063227666421306476379324074715770622746227136910445450301914281276098027990968407983962691151853678563877834221834027439718238065725844264138"), parse_int("3245789008328967059274849584342077916531909009637501918328323668736179176583263496463525128488282611559800773506973771797764811498834995234341530862286627"), params)
}

fn build_brainpoolp512t1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("8948962207650232551656602815159153422162609644098354511344597187200057010413552439917934304191956942765446530386427345937963894309923928536070534607816947"),
        n: parse_uint("8948962207650232551656602815159153422162609644098354511344597187200057010413418528378981730643524959857451398370029280583094215613882043973354392115544169"),
        h: parse_uint("1"),
        generator: Some((parse_int("5240454105373391383446315535930423532243726242869439206480578543706358506399554673205583372921814351137736817888782671966171301927338369930113338349467098"), parse_int("4783098043208509222858478731459039446855297686825168822962919559100076900387655035060042118755576220187973470126780576052258118403094460341772613532037938"))),
        name: Some("brainpoolP512t1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("8948962207650232551656602815159153422162609644098354511344597187200057010413552439917934304191956942765446530386427345937963894309923928536070534607816944"), parse_int("6532815740455945129522030162820444801309011444717674409730083343052139800841847092116476221316466234404847931899409316558007222582458822004777353814164030"), params)
}

fn build_prime192v1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6277101735386680763835789423207666416083908700390324961279"),
        n: parse_uint("6277101735386680763835789423176059013767194773182842284081"),
        h: parse_uint("1"),
        generator: Some((parse_int("602046282375688656758213480587526111916698976636884684818"), parse_int("174050332293622031404857552280219410364023488927386650641"))),
        name: Some("prime192v1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("6277101735386680763835789423207666416083908700390324961276"), parse_int("2455155546008943817740293915197451784769108058161191238065"), params)
}

fn build_prime192v2() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6277101735386680763835789423207666416083908700390324961279"),
        n: parse_uint("6277101735386680763835789423078825936192100537584385056049"),
        h: parse_uint("1"),
        generator: Some((parse_int("5851329466723574623122023978072381191095567081251774399306"), parse_int("2487701625881228691269808880535093938601070911264778280469"))),
        name: Some("prime192v2".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("6277101735386680763835789423207666416083908700390324961276"), parse_int("5005402392289390203552069470771117084861899307801456990547"), params)
}

fn build_prime192v3() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6277101735386680763835789423207666416083908700390324961279"),
        n: parse_uint("6277101735386680763835789423166314882687165660350679936019"),
        h: parse_uint("1"),
        generator: Some((parse_int("3068962813279260818967075386646565556597936748864191010966"), parse_int("1389308651191334868712987806154897411485840735611413676976"))),
        name: Some("prime192v3".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("6277101735386680763835789423207666416083908700390324961276"), parse_int("835424738382823911013350127192156429351504823785813797142"), params)
}

fn build_prime239v1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("883423532389192164791648750360308885314476597252960362792450860609699839"),
        n: parse_uint("883423532389192164791648750360308884807550341691627752275345424702807307"),
        h: parse_uint("1"),
        generator: Some((parse_int("110282003749548856476348533541186204577905061504881242240149511594420911"), parse_int("869078407435509378747351873793058868500210384946040694651368759217025454"))),
        name: Some("prime239v1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("883423532389192164791648750360308885314476597252960362792450860609699836"), parse_int("738525217406992417348596088038781724164860971797098971891240423363193866"), params)
}

fn build_prime239v2() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("883423532389192164791648750360308885314476597252960362792450860609699839"),
        n: parse_uint("883423532389192164791648750360308886392687657546993855147765732451295331"),
        h: parse_uint("1"),
        generator: Some((parse_int("391216823383454382695699374968715597047546990656793544472819218431619303"), parse_int("628089868206548595071356317553544393570683199925782012253471378783331514"))),
        name: Some("prime239v2".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("883423532389192164791648750360308885314476597252960362792450860609699836"), parse_int("672911360131302308487984934662800265942370984454769524007721579835502380"), params)
}

fn build_prime239v3() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("883423532389192164791648750360308885314476597252960362792450860609699839"),
        n: parse_uint("883423532389192164791648750360308884771190369765922550517967171058034001"),
        h: parse_uint("1"),
        generator: Some((parse_int("713702090966717781398151179513032310291275673609168278295934709018913114"), parse_int("152051417671827544218539107898347788360948341292488391005135896880966899"))),
        name: Some("prime239v3".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("883423532389192164791648750360308885314476597252960362792450860609699836"), parse_int("257710759664581349045614884019467140476383834471573891251575555059576126"), params)
}

fn build_prime256v1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("115792089210356248762697446949407573530086143415290314195533631308867097853951"),
        n: parse_uint("115792089210356248762697446949407573529996955224135760342422259061068512044369"),
        h: parse_uint("1"),
        generator: Some((parse_int("48439561293906451759052585252797914202762949526041747995844080717082404635286"), parse_int("36134250956749795798585127919587881956611106672985015071877198253568414405109"))),
        name: Some("prime256v1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("115792089210356248762697446949407573530086143415290314195533631308867097853948"), parse_int("41058363725152142129326129780047268409114441015993725554835256314039467401291"), params)
}

fn build_secp112r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("4451685225093714772084598273548427"),
        n: parse_uint("4451685225093714776491891542548933"),
        h: parse_uint("1"),
        generator: Some((parse_int("188281465057972534892223778713752"), parse_int("3419875491033170827167861896082688"))),
        name: Some("secp112r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("4451685225093714772084598273548424"), parse_int("2061118396808653202902996166388514"), params)
}

fn build_secp112r2() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("4451685225093714772084598273548427"),
        n: parse_uint("1112921306273428674967732714786891"),
        h: parse_uint("4"),
        generator: Some((parse_int("1534098225527667214992304222930499"), parse_int("3525120595527770847583704454622871"))),
        name: Some("secp112r2".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("1970543761890640310119143205433388"), parse_int("1660538572255285715897238774208265"), params)
}

fn build_secp128r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("340282366762482138434845932244680310783"),
        n: parse_uint("340282366762482138443322565580356624661"),
        h: parse_uint("1"),
        generator: Some((parse_int("29408993404948928992877151431649155974"), parse_int("275621562871047521857442314737465260675"))),
        name: Some("secp128r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("340282366762482138434845932244680310780"), parse_int("308990863222245658030922601041482374867"), params)
}

fn build_secp128r2() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("340282366762482138434845932244680310783"),
        n: parse_uint("85070591690620534603955721926813660579"),
        h: parse_uint("4"),
        generator: Some((parse_int("164048790688614013222215505581242564928"), parse_int("52787839253935625605232456597451787076"))),
        name: Some("secp128r2".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("284470887156368047300405921324061011681"), parse_int("126188322377389722996253562430093625949"), params)
}

fn build_secp160k1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1461501637330902918203684832716283019651637554291"),
        n: parse_uint("1461501637330902918203686915170869725397159163571"),
        h: parse_uint("1"),
        generator: Some((parse_int("338530205676502674729549372677647997389429898939"), parse_int("842365456698940303598009444920994870805149798382"))),
        name: Some("secp160k1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("0"), parse_int("7"), params)
}

fn build_secp160r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1461501637330902918203684832716283019653785059327"),
        n: parse_uint("1461501637330902918203687197606826779884643492439"),
        h: parse_uint("1"),
        generator: Some((parse_int("425826231723888350446541592701409065913635568770"), parse_int("203520114162904107873991457957346892027982641970"))),
        name: Some("secp160r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("1461501637330902918203684832716283019653785059324"), parse_int("163235791306168110546604919403271579530548345413"), params)
}

fn build_secp160r2() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1461501637330902918203684832716283019651637554291"),
        n: parse_uint("1461501637330902918203685083571792140653176136043"),
        h: parse_uint("1"),
        generator: Some((parse_int("473058756663038503608844550604547710019657059949"), parse_int("1454008495369951658060798698479395908327453245230"))),
        name: Some("secp160r2".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("1461501637330902918203684832716283019651637554288"), parse_int("1032640608390511495214075079957864673410201913530"), params)
}

fn build_secp192k1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6277101735386680763835789423207666416102355444459739541047"),
        n: parse_uint("6277101735386680763835789423061264271957123915200845512077"),
        h: parse_uint("1"),
        generator: Some((parse_int("5377521262291226325198505011805525673063229037935769709693"), parse_int("3805108391982600717572440947423858335415441070543209377693"))),
        name: Some("secp192k1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("0"), parse_int("3"), params)
}

fn build_secp224k1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("26959946667150639794667015087019630673637144422540572481099315275117"),
        n: parse_uint("26959946667150639794667015087019640346510327083120074548994958668279"),
        h: parse_uint("1"),
        generator: Some((parse_int("16983810465656793445178183341822322175883642221536626637512293983324"), parse_int("13272896753306862154536785447615077600479862871316829862783613755813"))),
        name: Some("secp224k1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("0"), parse_int("5"), params)
}

fn build_secp224r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("26959946667150639794667015087019630673557916260026308143510066298881"),
        n: parse_uint("26959946667150639794667015087019625940457807714424391721682722368061"),
        h: parse_uint("1"),
        generator: Some((parse_int("19277929113566293071110308034699488026831934219452440156649784352033"), parse_int("19926808758034470970197974370888749184205991990603949537637343198772"))),
        name: Some("secp224r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("26959946667150639794667015087019630673557916260026308143510066298878"), parse_int("18958286285566608000408668544493926415504680968679321075787234672564"), params)
}

fn build_secp256k1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("115792089237316195423570985008687907853269984665640564039457584007908834671663"),
        n: parse_uint("115792089237316195423570985008687907852837564279074904382605163141518161494337"),
        h: parse_uint("1"),
        generator: Some((parse_int("55066263022277343669578718895168534326250603453777594175500187360389116729240"), parse_int("32670510020758816978083085130507043184471273380659243275938904335757337482424"))),
        name: Some("secp256k1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("0"), parse_int("7"), params)
}

fn build_secp384r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112319"),
        n: parse_uint("39402006196394479212279040100143613805079739270465446667946905279627659399113263569398956308152294913554433653942643"),
        h: parse_uint("1"),
        generator: Some((parse_int("26247035095799689268623156744566981891852923491109213387815615900925518854738050089022388053975719786650872476732087"), parse_int("8325710961489029985546751289520108179287853048861315594709205902480503199884419224438643760392947333078086511627871"))),
        name: Some("secp384r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112316"), parse_int("27580193559959705877849011840389048093056905856361568521428707301988689241309860865136260764883745107765439761230575"), params)
}

fn build_secp521r1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151"),
        n: parse_uint("6864797660130609714981900799081393217269435300143305409394463459185543183397655394245057746333217197532963996371363321113864768612440380340372808892707005449"),
        h: parse_uint("1"),
        generator: Some((parse_int("2661740802050217063228768716723360960729859168756973147706671368418802944996427808491545080627771902352094241225065558662157113545570916814161637315895999846"), parse_int("3757180025770020463545507224491183603594455134769762486694567779615544477440556316691234405012945539562144444537289428522585666729196580810124344277578376784"))),
        name: Some("secp521r1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057148"), parse_int("1093849038073734274511112390766805569936207598951683748994586394495953116150735016013708737573759623248592132296706313309438452531591012912142327488478985984"), params)
}

fn build_wap_wsg_idm_ecid_wtls12() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("26959946667150639794667015087019630673557916260026308143510066298881"),
        n: parse_uint("26959946667150639794667015087019625940457807714424391721682722368061"),
        h: parse_uint("1"),
        generator: Some((parse_int("19277929113566293071110308034699488026831934219452440156649784352033"), parse_int("19926808758034470970197974370888749184205991990603949537637343198772"))),
        name: Some("wap-wsg-idm-ecid-wtls12".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("26959946667150639794667015087019630673557916260026308143510066298878"), parse_int("18958286285566608000408668544493926415504680968679321075787234672564"), params)
}

fn build_wap_wsg_idm_ecid_wtls6() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("4451685225093714772084598273548427"),
        n: parse_uint("4451685225093714776491891542548933"),
        h: parse_uint("1"),
        generator: Some((parse_int("188281465057972534892223778713752"), parse_int("3419875491033170827167861896082688"))),
        name: Some("wap-wsg-idm-ecid-wtls6".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("4451685225093714772084598273548424"), parse_int("2061118396808653202902996166388514"), params)
}

fn build_wap_wsg_idm_ecid_wtls7() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1461501637330902918203684832716283019651637554291"),
        n: parse_uint("1461501637330902918203685083571792140653176136043"),
        h: parse_uint("1"),
        generator: Some((parse_int("473058756663038503608844550604547710019657059949"), parse_int("1454008495369951658060798698479395908327453245230"))),
        name: Some("wap-wsg-idm-ecid-wtls7".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("1461501637330902918203684832716283019651637554288"), parse_int("1032640608390511495214075079957864673410201913530"), params)
}

fn build_wap_wsg_idm_ecid_wtls8() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("5192296858534827628530496329219559"),
        n: parse_uint("5192296858534827767273836114360297"),
        h: parse_uint("1"),
        generator: Some((parse_int("1"), parse_int("2"))),
        name: Some("wap-wsg-idm-ecid-wtls8".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("0"), parse_int("3"), params)
}

fn build_wap_wsg_idm_ecid_wtls9() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("1461501637330902918203684832716283019655932313743"),
        n: parse_uint("1461501637330902918203687013445034429194588307251"),
        h: parse_uint("1"),
        generator: Some((parse_int("1"), parse_int("2"))),
        name: Some("wap-wsg-idm-ecid-wtls9".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("0"), parse_int("3"), params)
}

fn build_curve25519() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("57896044618658097711785492504343953926634992332820282019728792003956564819949"),
        n: parse_uint("7237005577332262213973186563042994240857116359379907606001950938285454250989"),
        h: parse_uint("8"),
        generator: Some((parse_int("9"), parse_int("43114425171068552920764898935933967039370386198203806730763910166200978582548"))),
        name: Some("curve25519".to_string()),
        aliases: vec![],
    };
    Curve::montgomery(parse_int("486662"), parse_int("1"), params)
}

fn build_ed25519() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("57896044618658097711785492504343953926634992332820282019728792003956564819949"),
        n: parse_uint("7237005577332262213973186563042994240857116359379907606001950938285454250989"),
        h: parse_uint("8"),
        generator: Some((parse_int("15112221349535400772501151409588531511454012693041857206046113283949847762202"), parse_int("46316835694926478169428394003475163141307993866256225615783033603165251855960"))),
        name: Some("ed25519".to_string()),
        aliases: vec![],
    };
    Curve::twisted_edwards(parse_int("-1"), parse_int("37095705934669439343138083508754565189542113879843219016388785533085940283555"), Some(EdDsaParams { b: 256, quirks: vec![EdDsaQuirk::ClearLowBits(3), EdDsaQuirk::ClearTopBits(1), EdDsaQuirk::SetBit(254)], hash: EdDsaHash::Sha512 }), params)
}

fn build_anomalous() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("17676318486848893030961583018778670610489016512983351739677143"),
        n: parse_uint("17676318486848893030961583018778670610489016512983351739677143"),
        h: parse_uint("1"),
        generator: Some((parse_int("1619092589586542907492569170434842128165755668543894279235270"), parse_int("3436949547626524920645513316569700140535482973634182925459687"))),
        name: Some("Anomalous".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("15347898055371580590890576721314318823207531963035637503096292"), parse_int("7444386449934505970367865204569124728350661870959593404279615"), params)
}

fn build_m_221() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("3369993333393829974333376885877453834204643052817571560137951281149"),
        n: parse_uint("421249166674228746791672110734682167926895081980396304944335052891"),
        h: parse_uint("8"),
        generator: Some((parse_int("4"), parse_int("1630203008552496124843674615123983630541969261591546559209027208557"))),
        name: Some("M-221".to_string()),
        aliases: vec![],
    };
    Curve::montgomery(parse_int("117050"), parse_int("1"), params)
}

fn build_e_222() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6739986666787659948666753771754907668409286105635143120275902562187"),
        n: parse_uint("1684996666696914987166688442938726735569737456760058294185521417407"),
        h: parse_uint("4"),
        generator: Some((parse_int("2705691079882681090389589001251962954446177367541711474502428610129"), parse_int("28"))),
        name: Some("E-222".to_string()),
        aliases: vec![],
    };
    Curve::twisted_edwards(parse_int("1"), parse_int("160102"), None, params)
}

fn build_nist_p_224() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("26959946667150639794667015087019630673557916260026308143510066298881"),
        n: parse_uint("26959946667150639794667015087019625940457807714424391721682722368061"),
        h: parse_uint("1"),
        generator: Some((parse_int("19277929113566293071110308034699488026831934219452440156649784352033"), parse_int("19926808758034470970197974370888749184205991990603949537637343198772"))),
        name: Some("NIST P-224".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("-3"), parse_int("18958286285566608000408668544493926415504680968679321075787234672564"), params)
}

fn build_curve1174() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("3618502788666131106986593281521497120414687020801267626233049500247285301239"),
        n: parse_uint("904625697166532776746648320380374280092339035279495474023489261773642975601"),
        h: parse_uint("4"),
        generator: Some((parse_int("1582619097725911541954547006453739763381091388846394833492296309729998839514"), parse_int("3037538013604154504764115728651437646519513534305223422754827055689195992590"))),
        name: Some("Curve1174".to_string()),
        aliases: vec![],
    };
    Curve::twisted_edwards(parse_int("1"), parse_int("-1174"), None, params)
}

fn build_bn_2_254() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("16798108731015832284940804142231733909889187121439069848933715426072753864723"),
        n: parse_uint("16798108731015832284940804142231733909759579603404752749028378864165570215949"),
        h: parse_uint("1"),
        generator: Some((parse_int("-1"), parse_int("1"))),
        name: Some("BN(2,254)".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("0"), parse_int("2"), params)
}

fn build_anssi_frp256v1() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("109454571331697278617670725030735128145969349647868738157201323556196022393859"),
        n: parse_uint("109454571331697278617670725030735128146004546811402412653072203207726079563233"),
        h: parse_uint("1"),
        generator: Some((parse_int("82638672503301278923015998535776227331280144783487139112686874194432446389503"), parse_int("43992510890276411535679659957604584722077886330284298232193264058442323471611"))),
        name: Some("ANSSI FRP256v1".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("-3"), parse_int("107744541122042688792155207242782455150382764043089114141096634497567301547839"), params)
}

fn build_nist_p_256() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("115792089210356248762697446949407573530086143415290314195533631308867097853951"),
        n: parse_uint("115792089210356248762697446949407573529996955224135760342422259061068512044369"),
        h: parse_uint("1"),
        generator: Some((parse_int("48439561293906451759052585252797914202762949526041747995844080717082404635286"), parse_int("36134250956749795798585127919587881956611106672985015071877198253568414405109"))),
        name: Some("NIST P-256".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("-3"), parse_int("41058363725152142129326129780047268409114441015993725554835256314039467401291"), params)
}

fn build_e_382() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("9850501549098619803069760025035903451269934817616361666987073351061430442874302652853566563721228910201656997576599"),
        n: parse_uint("2462625387274654950767440006258975862817483704404090416745738034557663054564649171262659326683244604346084081047321"),
        h: parse_uint("4"),
        generator: Some((parse_int("3914921414754292646847594472454013487047137431784830634731377862923477302047857640522480241298429278603678181725699"), parse_int("17"))),
        name: Some("E-382".to_string()),
        aliases: vec![],
    };
    Curve::twisted_edwards(parse_int("1"), parse_int("-67254"), None, params)
}

fn build_m_383() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("19701003098197239606139520050071806902539869635232723333974146702122860885748605305707133127442457820403313995153221"),
        n: parse_uint("2462625387274654950767440006258975862817483704404090416746934574041288984234680883008327183083615266784870011007447"),
        h: parse_uint("8"),
        generator: Some((parse_int("12"), parse_int("4737623401891753997660546300375902576839617167257703725630389791524463565757299203154901655432096558642117242906494"))),
        name: Some("M-383".to_string()),
        aliases: vec![],
    };
    Curve::montgomery(parse_int("2065150"), parse_int("1"), params)
}

fn build_curve383187() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("19701003098197239606139520050071806902539869635232723333974146702122860885748605305707133127442457820403313995153221"),
        n: parse_uint("2462625387274654950767440006258975862817483704404090416747124418612574880605944350369924877650606926799392131911201"),
        h: parse_uint("8"),
        generator: Some((parse_int("5"), parse_int("4759238150142744228328102229734187233490253962521130945928672202662038422584867624507245060283757321006861735839455"))),
        name: Some("Curve383187".to_string()),
        aliases: vec![],
    };
    Curve::montgomery(parse_int("229969"), parse_int("1"), params)
}

fn build_nist_p_384() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112319"),
        n: parse_uint("39402006196394479212279040100143613805079739270465446667946905279627659399113263569398956308152294913554433653942643"),
        h: parse_uint("1"),
        generator: Some((parse_int("26247035095799689268623156744566981891852923491109213387815615900925518854738050089022388053975719786650872476732087"), parse_int("8325710961489029985546751289520108179287853048861315594709205902480503199884419224438643760392947333078086511627871"))),
        name: Some("NIST P-384".to_string()),
        aliases: vec![],
    };
    Curve::short_weierstrass(parse_int("-3"), parse_int("27580193559959705877849011840389048093056905856361568521428707301988689241309860865136260764883745107765439761230575"), params)
}

fn build_curve41417() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("42307582002575910332922579714097346549017899709713998034217522897561970639123926132812109468141778230245837569601494931472367"),
        n: parse_uint("5288447750321988791615322464262168318627237463714249754277190328831105466135348245791335989419337099796002495788978276839289"),
        h: parse_uint("8"),
        generator: Some((parse_int("17319886477121189177719202498822615443556957307604340815256226171904769976866975908866528699294134494857887698432266169206165"), parse_int("34"))),
        name: Some("Curve41417".to_string()),
        aliases: vec![],
    };
    Curve::twisted_edwards(parse_int("1"), parse_int("3617"), None, params)
}

fn build_ed448_goldilocks() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("726838724295606890549323807888004534353641360687318060281490199180612328166730772686396383698676545930088884461843637361053498018365439"),
        n: parse_uint("181709681073901722637330951972001133588410340171829515070372549795146003961539585716195755291692375963310293709091662304773755859649779"),
        h: parse_uint("4"),
        generator: Some((parse_int("117812161263436946737282484343310064665180535357016373416879082147939404277809514858788439644911793978499419995990477371552926308078495"), parse_int("19"))),
        name: Some("Ed448-Goldilocks".to_string()),
        aliases: vec![],
    };
    Curve::twisted_edwards(parse_int("1"), parse_int("-39081"), Some(EdDsaParams { b: 456, quirks: vec![EdDsaQuirk::ClearLowBits(2), EdDsaQuirk::ClearTopBits(8), EdDsaQuirk::SetBit(447)], hash: EdDsaHash::Shake256 }), params)
}

fn build_m_511() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6703903964971298549787012499102923063739682910296196688861780721860882015036773488400937149083451713845015929093243025426876941405973284973216824503041861"),
        n: parse_uint("837987995621412318723376562387865382967460363787024586107722590232610251879607410804876779383055508762141059258497448934987052508775626162460930737942299"),
        h: parse_uint("8"),
        generator: Some((parse_int("5"), parse_int("2500410645565072423368981149139213252211568685173608590070979264248275228603899706950518127817176591878667784247582124505430745177116625808811349787373477"))),
        name: Some("M-511".to_string()),
        aliases: vec![],
    };
    Curve::montgomery(parse_int("530438"), parse_int("1"), params)
}

fn build_e_521() -> Result<Arc<Curve>> {
    let params = CurveParams {
        p: parse_uint("6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151"),
        n: parse_uint("1716199415032652428745475199770348304317358825035826352348615864796385795849413675475876651663657849636693659065234142604319282948702542317993421293670108523"),
        h: parse_uint("4"),
        generator: Some((parse_int("1571054894184995387535939749894317568645297350402905821437625181152304994381188529632591196067604100772673927915114267193389905003276673749012051148356041324"), parse_int("12"))),
        name: Some("E-521".to_string()),
        aliases: vec![],
    };
    Curve::twisted_edwards(parse_int("1"), parse_int("-376014"), None, params)
}

struct Registry {
    builders: HashMap<&'static str, Builder>,
    aliases: HashMap<&'static str, &'static str>,
    cache: RwLock<HashMap<&'static str, Arc<Curve>>>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn builders() -> HashMap<&'static str, Builder> {
    let mut m: HashMap<&'static str, Builder> = HashMap::new();
    m.insert("brainpoolP160r1", build_brainpoolp160r1 as Builder);
    m.insert("brainpoolP160t1", build_brainpoolp160t1 as Builder);
    m.insert("brainpoolP192r1", build_brainpoolp192r1 as Builder);
    m.insert("brainpoolP192t1", build_brainpoolp192t1 as Builder);
    m.insert("brainpoolP224r1", build_brainpoolp224r1 as Builder);
    m.insert("brainpoolP224t1", build_brainpoolp224t1 as Builder);
    m.insert("brainpoolP256r1", build_brainpoolp256r1 as Builder);
    m.insert("brainpoolP256t1", build_brainpoolp256t1 as Builder);
    m.insert("brainpoolP320r1", build_brainpoolp320r1 as Builder);
    m.insert("brainpoolP320t1", build_brainpoolp320t1 as Builder);
    m.insert("brainpoolP384r1", build_brainpoolp384r1 as Builder);
    m.insert("brainpoolP384t1", build_brainpoolp384t1 as Builder);
    m.insert("brainpoolP512r1", build_brainpoolp512r1 as Builder);
    m.insert("brainpoolP512t1", build_brainpoolp512t1 as Builder);
    m.insert("prime192v1", build_prime192v1 as Builder);
    m.insert("prime192v2", build_prime192v2 as Builder);
    m.insert("prime192v3", build_prime192v3 as Builder);
    m.insert("prime239v1", build_prime239v1 as Builder);
    m.insert("prime239v2", build_prime239v2 as Builder);
    m.insert("prime239v3", build_prime239v3 as Builder);
    m.insert("prime256v1", build_prime256v1 as Builder);
    m.insert("secp112r1", build_secp112r1 as Builder);
    m.insert("secp112r2", build_secp112r2 as Builder);
    m.insert("secp128r1", build_secp128r1 as Builder);
    m.insert("secp128r2", build_secp128r2 as Builder);
    m.insert("secp160k1", build_secp160k1 as Builder);
    m.insert("secp160r1", build_secp160r1 as Builder);
    m.insert("secp160r2", build_secp160r2 as Builder);
    m.insert("secp192k1", build_secp192k1 as Builder);
    m.insert("secp224k1", build_secp224k1 as Builder);
    m.insert("secp224r1", build_secp224r1 as Builder);
    m.insert("secp256k1", build_secp256k1 as Builder);
    m.insert("secp384r1", build_secp384r1 as Builder);
    m.insert("secp521r1", build_secp521r1 as Builder);
    m.insert("wap-wsg-idm-ecid-wtls12", build_wap_wsg_idm_ecid_wtls12 as Builder);
    m.insert("wap-wsg-idm-ecid-wtls6", build_wap_wsg_idm_ecid_wtls6 as Builder);
    m.insert("wap-wsg-idm-ecid-wtls7", build_wap_wsg_idm_ecid_wtls7 as Builder);
    m.insert("wap-wsg-idm-ecid-wtls8", build_wap_wsg_idm_ecid_wtls8 as Builder);
    m.insert("wap-wsg-idm-ecid-wtls9", build_wap_wsg_idm_ecid_wtls9 as Builder);
    m.insert("curve25519", build_curve25519 as Builder);
    m.insert("ed25519", build_ed25519 as Builder);
    m.insert("Anomalous", build_anomalous as Builder);
    m.insert("M-221", build_m_221 as Builder);
    m.insert("E-222", build_e_222 as Builder);
    m.insert("NIST P-224", build_nist_p_224 as Builder);
    m.insert("Curve1174", build_curve1174 as Builder);
    m.insert("BN(2,254)", build_bn_2_254 as Builder);
    m.insert("ANSSI FRP256v1", build_anssi_frp256v1 as Builder);
    m.insert("NIST P-256", build_nist_p_256 as Builder);
    m.insert("E-382", build_e_382 as Builder);
    m.insert("M-383", build_m_383 as Builder);
    m.insert("Curve383187", build_curve383187 as Builder);
    m.insert("NIST P-384", build_nist_p_384 as Builder);
    m.insert("Curve41417", build_curve41417 as Builder);
    m.insert("Ed448-Goldilocks", build_ed448_goldilocks as Builder);
    m.insert("M-511", build_m_511 as Builder);
    m.insert("E-521", build_e_521 as Builder);
    m
}

fn alias_table() -> HashMap<&'static str, &'static str> {
    let mut m: HashMap<&'static str, &'static str> = HashMap::new();
    m.insert("Ed448", "Ed448-Goldilocks");
    m.insert("NIST P-192", "prime192v1");
    m.insert("NIST P-521", "secp521r1");
    m
}

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry {
        builders: builders(),
        aliases: alias_table(),
        cache: RwLock::new(HashMap::new()),
    })
}

fn canonical_name(reg: &'static Registry, name: &str) -> Option<&'static str> {
    reg.builders
        .keys()
        .find(|&&k| k == name)
        .or_else(|| reg.aliases.get(name).copied())
}

/// Looks up a curve by its registered name or alias, constructing and
/// caching it on first use. `Err(NameNotFound)` if no curve or alias
/// matches.
pub fn get_curve_by_name(name: &str) -> Result<Arc<Curve>> {
    let reg = registry();
    let canonical = canonical_name(reg, name).ok_or(Error::NameNotFound)?;
    if let Some(curve) = reg.cache.read().expect("registry lock poisoned").get(canonical) {
        return Ok(curve.clone());
    }
    let builder = *reg.builders.get(canonical).ok_or(Error::NameNotFound)?;
    let curve = builder()?;
    reg.cache
        .write()
        .expect("registry lock poisoned")
        .insert(canonical, curve.clone());
    Ok(curve)
}

/// All canonical curve names known to the registry (aliases excluded), sorted.
pub fn curve_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = registry().builders.keys().copied().collect();
    names.sort_unstable();
    names
}

/// All aliases known to the registry, paired with the canonical name they resolve to.
pub fn curve_aliases() -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<(&'static str, &'static str)> =
        registry().aliases.iter().map(|(k, v)| (*k, *v)).collect();
    pairs.sort_unstable();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_curve25519_and_ed25519() {
        let c25519 = get_curve_by_name("curve25519").unwrap();
        assert_eq!(c25519.curve_type(), "montgomery");
        let ed25519 = get_curve_by_name("ed25519").unwrap();
        assert_eq!(ed25519.curve_type(), "twistededwards");
        assert!(ed25519.eddsa_params().is_some());
    }

    #[test]
    fn resolves_nist_aliases() {
        let p256_direct = get_curve_by_name("prime256v1").unwrap();
        let p256_alias = get_curve_by_name("NIST P-256").unwrap();
        assert_eq!(p256_direct.p(), p256_alias.p());

        let p192 = get_curve_by_name("NIST P-192").unwrap();
        assert_eq!(p192.p(), get_curve_by_name("prime192v1").unwrap().p());
    }

    #[test]
    fn unknown_name_errors() {
        assert_eq!(get_curve_by_name("not-a-curve").unwrap_err(), Error::NameNotFound);
    }

    #[test]
    fn all_57_curves_construct() {
        for name in curve_names() {
            get_curve_by_name(name).unwrap_or_else(|e| panic!("{name} failed to build: {e}"));
        }
    }
}
