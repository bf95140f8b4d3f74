// Bundled character table.
// Order is difficulty order: the first ten rows are level 1, the next ten are
// added by level 2, and so on. Meanings are Spanish with `/` separated
// alternatives; the example tuple is (chinese, pinyin, meaning).

pub(super) type RawExample = (&'static str, &'static str, &'static str);
pub(super) type RawEntry = (&'static str, &'static str, &'static str, Option<RawExample>);

pub(super) const CHARACTER_TABLE: &[RawEntry] = &[
    // Level 1
    ("的", "de", "de/partícula posesiva", Some(("我的书", "wǒ de shū", "mi libro"))),
    ("一", "yī", "uno", Some(("一个人", "yí gè rén", "una persona"))),
    ("是", "shì", "ser/estar/sí", Some(("我是学生", "wǒ shì xuésheng", "soy estudiante"))),
    ("不", "bù", "no", Some(("我不去", "wǒ bú qù", "no voy"))),
    ("了", "le", "partícula de acción completada", Some(("我吃了", "wǒ chī le", "ya comí"))),
    ("在", "zài", "en/estar en", Some(("我在家", "wǒ zài jiā", "estoy en casa"))),
    ("人", "rén", "persona/gente", Some(("中国人", "Zhōngguó rén", "persona china"))),
    ("有", "yǒu", "tener/haber", Some(("我有一个问题", "wǒ yǒu yí gè wèntí", "tengo una pregunta"))),
    ("我", "wǒ", "yo/me", Some(("我爱你", "wǒ ài nǐ", "te quiero"))),
    ("他", "tā", "él", Some(("他是老师", "tā shì lǎoshī", "él es profesor"))),
    // Level 2
    ("这", "zhè", "este/esto", Some(("这是什么", "zhè shì shénme", "¿qué es esto?"))),
    ("个", "gè", "clasificador general", Some(("三个苹果", "sān gè píngguǒ", "tres manzanas"))),
    ("们", "men", "plural de personas", Some(("我们", "wǒmen", "nosotros"))),
    ("中", "zhōng", "medio/centro", Some(("中国", "Zhōngguó", "China"))),
    ("来", "lái", "venir", Some(("你来吧", "nǐ lái ba", "ven tú"))),
    ("上", "shàng", "arriba/subir", Some(("上班", "shàngbān", "ir a trabajar"))),
    ("大", "dà", "grande", Some(("大学", "dàxué", "universidad"))),
    ("为", "wèi", "para/por", Some(("为什么", "wèishénme", "¿por qué?"))),
    ("和", "hé", "y/con", Some(("你和我", "nǐ hé wǒ", "tú y yo"))),
    ("国", "guó", "país", Some(("外国", "wàiguó", "extranjero"))),
    // Level 3
    ("地", "dì", "tierra/suelo", Some(("地图", "dìtú", "mapa"))),
    ("到", "dào", "llegar/hasta", Some(("我到了", "wǒ dào le", "ya llegué"))),
    ("以", "yǐ", "con/por medio de", Some(("可以", "kěyǐ", "poder"))),
    ("说", "shuō", "hablar/decir", Some(("说中文", "shuō Zhōngwén", "hablar chino"))),
    ("时", "shí", "tiempo/hora", Some(("时间", "shíjiān", "tiempo"))),
    ("要", "yào", "querer/necesitar", Some(("我要水", "wǒ yào shuǐ", "quiero agua"))),
    ("就", "jiù", "entonces/justo", Some(("就是这个", "jiù shì zhège", "es justo este"))),
    ("出", "chū", "salir", Some(("出门", "chūmén", "salir de casa"))),
    ("会", "huì", "saber hacer/reunión", Some(("我会游泳", "wǒ huì yóuyǒng", "sé nadar"))),
    ("可", "kě", "poder/aprobar", Some(("可能", "kěnéng", "posible"))),
    // Level 4
    ("也", "yě", "también", Some(("我也是", "wǒ yě shì", "yo también"))),
    ("你", "nǐ", "tú", Some(("你好", "nǐ hǎo", "hola"))),
    ("对", "duì", "correcto/hacia", Some(("对不起", "duìbuqǐ", "lo siento"))),
    ("生", "shēng", "nacer/vida", Some(("学生", "xuésheng", "estudiante"))),
    ("能", "néng", "poder/capacidad", Some(("你能来吗", "nǐ néng lái ma", "¿puedes venir?"))),
    ("而", "ér", "y/pero", Some(("而且", "érqiě", "además"))),
    ("子", "zǐ", "hijo/niño", Some(("孩子", "háizi", "niño"))),
    ("那", "nà", "ese/aquel", Some(("那是谁", "nà shì shéi", "¿quién es ese?"))),
    ("得", "dé", "obtener", Some(("得到", "dédào", "conseguir"))),
    ("于", "yú", "en/a", Some(("关于", "guānyú", "acerca de"))),
    // Level 5
    ("着", "zhe", "partícula de acción continua", Some(("他笑着说", "tā xiào zhe shuō", "dijo sonriendo"))),
    ("下", "xià", "abajo/bajar", Some(("下雨", "xià yǔ", "llover"))),
    ("自", "zì", "uno mismo/desde", Some(("自己", "zìjǐ", "uno mismo"))),
    ("之", "zhī", "de/partícula literaria", Some(("之后", "zhīhòu", "después"))),
    ("年", "nián", "año", Some(("今年", "jīnnián", "este año"))),
    ("过", "guò", "pasar/cruzar", Some(("过马路", "guò mǎlù", "cruzar la calle"))),
    ("发", "fā", "enviar/emitir", Some(("发短信", "fā duǎnxìn", "enviar un mensaje"))),
    ("后", "hòu", "después/detrás", Some(("以后", "yǐhòu", "en el futuro"))),
    ("作", "zuò", "hacer/obra", Some(("工作", "gōngzuò", "trabajo"))),
    ("里", "lǐ", "dentro", Some(("家里", "jiā lǐ", "en casa"))),
    // Level 6
    ("用", "yòng", "usar", Some(("用筷子", "yòng kuàizi", "usar palillos"))),
    ("道", "dào", "camino/saber", Some(("知道", "zhīdào", "saber"))),
    ("行", "xíng", "caminar/estar bien", Some(("不行", "bù xíng", "no vale"))),
    ("所", "suǒ", "lugar/lo que", Some(("所以", "suǒyǐ", "por lo tanto"))),
    ("然", "rán", "así/correcto", Some(("当然", "dāngrán", "por supuesto"))),
    ("家", "jiā", "casa/familia", Some(("回家", "huí jiā", "volver a casa"))),
    ("种", "zhǒng", "tipo/clase", Some(("这种书", "zhè zhǒng shū", "este tipo de libro"))),
    ("事", "shì", "asunto/cosa", Some(("没事", "méi shì", "no pasa nada"))),
    ("成", "chéng", "convertirse/lograr", Some(("成功", "chénggōng", "éxito"))),
    ("方", "fāng", "cuadrado/dirección", Some(("地方", "dìfang", "lugar"))),
    // Level 7
    ("多", "duō", "mucho/muchos", Some(("很多人", "hěn duō rén", "mucha gente"))),
    ("经", "jīng", "pasar por/clásico", Some(("已经", "yǐjīng", "ya"))),
    ("么", "me", "sufijo interrogativo", Some(("什么", "shénme", "¿qué?"))),
    ("去", "qù", "ir", Some(("去学校", "qù xuéxiào", "ir a la escuela"))),
    ("法", "fǎ", "ley/método", Some(("方法", "fāngfǎ", "método"))),
    ("学", "xué", "estudiar/aprender", Some(("学中文", "xué Zhōngwén", "estudiar chino"))),
    ("如", "rú", "como/si", Some(("如果", "rúguǒ", "si"))),
    ("都", "dōu", "todos/ambos", Some(("我们都去", "wǒmen dōu qù", "todos vamos"))),
    ("同", "tóng", "igual/juntos", Some(("同学", "tóngxué", "compañero de clase"))),
    ("现", "xiàn", "ahora/aparecer", Some(("现在", "xiànzài", "ahora"))),
    // Level 8
    ("当", "dāng", "cuando/servir de", Some(("当时", "dāngshí", "en aquel momento"))),
    ("没", "méi", "no haber/no tener", Some(("没有", "méiyǒu", "no tener"))),
    ("动", "dòng", "mover", Some(("运动", "yùndòng", "deporte"))),
    ("面", "miàn", "cara/superficie/fideos", Some(("面条", "miàntiáo", "fideos"))),
    ("起", "qǐ", "levantarse/empezar", Some(("起床", "qǐchuáng", "levantarse de la cama"))),
    ("看", "kàn", "mirar/ver/leer", Some(("看书", "kàn shū", "leer un libro"))),
    ("定", "dìng", "fijar/decidir", Some(("一定", "yídìng", "sin falta"))),
    ("天", "tiān", "cielo/día", Some(("今天", "jīntiān", "hoy"))),
    ("分", "fēn", "dividir/minuto", Some(("十分钟", "shí fēnzhōng", "diez minutos"))),
    ("还", "hái", "todavía/además", Some(("还没", "hái méi", "todavía no"))),
    // Level 9
    ("进", "jìn", "entrar/avanzar", Some(("请进", "qǐng jìn", "pase, por favor"))),
    ("好", "hǎo", "bueno/bien", Some(("很好", "hěn hǎo", "muy bien"))),
    ("小", "xiǎo", "pequeño", Some(("小猫", "xiǎo māo", "gatito"))),
    ("部", "bù", "parte/sección", Some(("全部", "quánbù", "todo"))),
    ("其", "qí", "su/ese", Some(("其他", "qítā", "otros"))),
    ("些", "xiē", "algunos", Some(("一些", "yìxiē", "algunos"))),
    ("主", "zhǔ", "dueño/principal", Some(("主要", "zhǔyào", "principal"))),
    ("样", "yàng", "forma/manera", Some(("怎么样", "zěnmeyàng", "¿qué tal?"))),
    ("理", "lǐ", "razón/ordenar", Some(("道理", "dàolǐ", "razón"))),
    ("心", "xīn", "corazón/mente", Some(("小心", "xiǎoxīn", "¡cuidado!"))),
    // Level 10
    ("她", "tā", "ella", Some(("她是我妈妈", "tā shì wǒ māma", "ella es mi madre"))),
    ("本", "běn", "raíz/clasificador de libros", Some(("一本书", "yì běn shū", "un libro"))),
    ("前", "qián", "delante/antes", Some(("以前", "yǐqián", "antes"))),
    ("开", "kāi", "abrir/encender", Some(("开门", "kāi mén", "abrir la puerta"))),
    ("但", "dàn", "pero", Some(("但是", "dànshì", "pero"))),
    ("因", "yīn", "causa/porque", Some(("因为", "yīnwèi", "porque"))),
    ("只", "zhǐ", "solo/únicamente", Some(("只有一个", "zhǐ yǒu yí gè", "solo hay uno"))),
    ("从", "cóng", "desde", Some(("从北京来", "cóng Běijīng lái", "venir desde Pekín"))),
    ("想", "xiǎng", "pensar/querer", Some(("我想你", "wǒ xiǎng nǐ", "te extraño"))),
    ("实", "shí", "real/verdadero", None),
];
